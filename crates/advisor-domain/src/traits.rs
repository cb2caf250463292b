//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::analysis::DEFAULT_SUBJECT;
use crate::score::Score;

/// Request sent to an analysis provider
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    /// Validated score to analyse
    pub score: Score,

    /// Subject the score belongs to
    pub subject: String,
}

impl AnalysisRequest {
    /// Create a request, defaulting the subject to "General"
    pub fn new(score: Score, subject: Option<&str>) -> Self {
        Self {
            score,
            subject: subject.unwrap_or(DEFAULT_SUBJECT).to_string(),
        }
    }
}

/// Trait for remote analysis services
///
/// Implemented by the infrastructure layer (advisor-provider)
pub trait AnalysisProvider {
    /// Error type for provider operations
    type Error;

    /// Fetch an analysis for the request. Implementations make a single attempt.
    fn fetch_analysis(&self, request: &AnalysisRequest) -> Result<crate::Analysis, Self::Error>;
}
