//! Error types for the Analyzer

use advisor_domain::InvalidScore;
use thiserror::Error;

/// Result type alias for analyzer operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Errors surfaced by the Analyzer
///
/// Provider failures never appear here: they trigger the local fallback.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzerError {
    /// Score outside `[0, 100]`
    #[error(transparent)]
    InvalidScore(#[from] InvalidScore),
}
