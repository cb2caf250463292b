//! Result types for analysis

use advisor_domain::Analysis;
use std::fmt;

/// Where an analysis came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisSource {
    /// Returned by the remote provider
    Remote,

    /// Built from the local tables
    Local {
        /// Provider error that caused the fallback; `None` when no provider
        /// was configured
        fallback_reason: Option<String>,
    },
}

impl AnalysisSource {
    /// Whether the local analysis replaced a failed remote call
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            AnalysisSource::Local {
                fallback_reason: Some(_)
            }
        )
    }

    /// Short label ("remote" or "local")
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisSource::Remote => "remote",
            AnalysisSource::Local { .. } => "local",
        }
    }
}

impl fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An analysis together with its source
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    /// The analysis
    pub analysis: Analysis,

    /// Where it came from
    pub source: AnalysisSource,
}
