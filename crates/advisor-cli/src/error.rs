//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Score outside [0, 100]
    #[error(transparent)]
    Score(#[from] advisor_domain::InvalidScore),

    /// Analyzer error
    #[error(transparent)]
    Analyzer(#[from] advisor_analyzer::AnalyzerError),

    /// Provider construction error
    #[error("Provider error: {0}")]
    Provider(#[from] advisor_provider::ProviderError),

    /// Logging setup error
    #[error("Logging error: {0}")]
    Logging(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Operation not permitted
    #[error("Operation not permitted: {0}")]
    NotPermitted(String),
}
