//! Playlist Advisor Domain Layer
//!
//! This crate contains the score classifier: the pure business logic that maps
//! a test score to a playlist tier and builds the local recommendation analysis.
//! It has ZERO external dependencies and defines the value objects and trait
//! interfaces that the provider, analyzer and CLI crates depend upon.
//!
//! ## Key Concepts
//!
//! - **Score**: A validated test result in `[0, 100]`
//! - **Tier**: One of five ordered playlist bands (Beginner → Expert)
//! - **Confidence**: Certainty of the local analysis, `min(score / 2 + 50, 95)`
//! - **Analysis**: Strengths, improvement areas and next steps for a score
//!
//! ## Example
//!
//! ```
//! use advisor_domain::{build_local_analysis, classify, Tier};
//!
//! assert_eq!(classify(47.0).unwrap(), Tier::Intermediate);
//!
//! let analysis = build_local_analysis(15.0, Some("Mathematics")).unwrap();
//! assert_eq!(analysis.tier(), Tier::Beginner);
//! assert_eq!(analysis.confidence().value(), 57.5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod confidence;
pub mod recommendations;
pub mod score;
pub mod tier;
pub mod traits;

// Re-exports for convenience
pub use analysis::{build_local_analysis, Analysis, DEFAULT_SUBJECT};
pub use confidence::Confidence;
pub use score::{InvalidScore, Score, MAX_SCORE, MIN_SCORE};
pub use tier::{classify, Tier};
pub use traits::{AnalysisProvider, AnalysisRequest};
