//! Core Analyzer implementation

use crate::error::Result;
use crate::types::{AnalysisSource, Assessment};
use advisor_domain::{build_local_analysis, Analysis, AnalysisProvider, AnalysisRequest, Score};
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Builds analyses, trying the remote provider first
///
/// With no provider the local analysis is returned directly.
pub struct Analyzer<P>
where
    P: AnalysisProvider,
{
    provider: Option<P>,
}

impl<P> Analyzer<P>
where
    P: AnalysisProvider,
    P::Error: Display,
{
    /// Create an Analyzer backed by a remote provider
    pub fn new(provider: P) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Create an Analyzer that only uses the local tables
    pub fn local_only() -> Self {
        Self { provider: None }
    }

    /// Whether a remote provider is configured
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Produce an analysis for a score
    ///
    /// Equivalent to [`Analyzer::assess`] without the source information.
    pub fn analyze(&self, score: f64, subject: Option<&str>) -> Result<Analysis> {
        self.assess(score, subject).map(|assessment| assessment.analysis)
    }

    /// Produce an analysis for a score, recording where it came from
    ///
    /// The score is validated before any provider call. The provider gets one
    /// attempt; any error it returns is logged and replaced by the local
    /// analysis.
    pub fn assess(&self, score: f64, subject: Option<&str>) -> Result<Assessment> {
        let validated = Score::new(score)?;

        let Some(provider) = &self.provider else {
            debug!("No analysis provider configured, using local analysis");
            return Ok(Assessment {
                analysis: build_local_analysis(score, subject)?,
                source: AnalysisSource::Local {
                    fallback_reason: None,
                },
            });
        };

        let request = AnalysisRequest::new(validated, subject);
        match provider.fetch_analysis(&request) {
            Ok(analysis) => {
                info!(
                    "Remote analysis received for score {} ({})",
                    request.score,
                    analysis.tier()
                );
                Ok(Assessment {
                    analysis,
                    source: AnalysisSource::Remote,
                })
            }
            Err(e) => {
                warn!("Remote analysis failed: {}. Using local analysis.", e);
                Ok(Assessment {
                    analysis: build_local_analysis(score, subject)?,
                    source: AnalysisSource::Local {
                        fallback_reason: Some(e.to_string()),
                    },
                })
            }
        }
    }
}
