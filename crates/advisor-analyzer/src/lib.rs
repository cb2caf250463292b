//! Playlist Advisor Analyzer
//!
//! Produces the analysis for a score, preferring the remote analysis provider
//! and falling back to the local score classifier.
//!
//! # Architecture
//!
//! ```text
//! Score → Analyzer → AnalysisProvider ──ok──→ Analysis (remote)
//!                          │
//!                          └──error──→ build_local_analysis → Analysis (local)
//! ```
//!
//! Provider failures are logged and absorbed; only an out-of-range score is
//! reported to the caller.
//!
//! # Example Usage
//!
//! ```
//! use advisor_analyzer::{AnalysisSource, Analyzer};
//! use advisor_domain::build_local_analysis;
//! use advisor_provider::MockProvider;
//!
//! let analyzer = Analyzer::new(MockProvider::unavailable());
//! let assessment = analyzer.assess(15.0, Some("Mathematics")).unwrap();
//!
//! assert!(assessment.source.is_fallback());
//! assert_eq!(
//!     assessment.analysis,
//!     build_local_analysis(15.0, Some("Mathematics")).unwrap()
//! );
//! ```

#![warn(missing_docs)]

mod analyzer;
mod error;
mod types;


pub use analyzer::Analyzer;
pub use error::{AnalyzerError, Result};
pub use types::{AnalysisSource, Assessment};
