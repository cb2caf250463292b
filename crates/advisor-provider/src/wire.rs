//! JSON wire format of the remote analysis service
//!
//! Field names follow the service contract (`playlist_recommendation`,
//! `areas_for_improvement`, `confidence_level`), which is also what the CLI
//! emits for `--format json`.

use crate::ProviderError;
use advisor_domain::{Analysis, AnalysisRequest, Confidence, Tier};
use serde::{Deserialize, Serialize};

/// Model identifier sent with every request unless overridden
pub const DEFAULT_MODEL: &str = "score_analyzer_v1";

/// Request body for the analyze endpoint
#[derive(Debug, Serialize)]
pub struct AnalyzeRequestBody<'a> {
    /// Score being analysed
    pub score: f64,
    /// Subject of the test
    pub subject: &'a str,
    /// Model identifier
    pub model: &'a str,
}

impl<'a> AnalyzeRequestBody<'a> {
    /// Build the body for a domain request
    pub fn new(request: &'a AnalysisRequest, model: &'a str) -> Self {
        Self {
            score: request.score.value(),
            subject: &request.subject,
            model,
        }
    }
}

/// Analysis-shaped payload exchanged with the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPayload {
    /// Analysed score
    pub score: f64,
    /// Playlist label, e.g. "Playlist 2 (Elementary)"
    #[serde(alias = "tier")]
    pub playlist_recommendation: String,
    /// Subject of the test
    pub subject: String,
    /// Strengths
    pub strengths: Vec<String>,
    /// Areas for improvement
    pub areas_for_improvement: Vec<String>,
    /// Recommended next steps
    pub next_steps: Vec<String>,
    /// Confidence percentage
    pub confidence_level: f64,
}

impl AnalysisPayload {
    /// Convert a decoded payload into a domain analysis
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidResponse`] if the payload:
    /// - refers to a different score than the request
    /// - carries an unknown playlist label
    /// - has a confidence outside `[0, 100]`
    pub fn into_analysis(self, request: &AnalysisRequest) -> Result<Analysis, ProviderError> {
        if self.score != request.score.value() {
            return Err(ProviderError::InvalidResponse(format!(
                "score mismatch: requested {}, received {}",
                request.score, self.score
            )));
        }

        let tier = Tier::parse(&self.playlist_recommendation).ok_or_else(|| {
            ProviderError::InvalidResponse(format!(
                "unknown playlist recommendation '{}'",
                self.playlist_recommendation
            ))
        })?;

        let confidence = Confidence::from_percent(self.confidence_level).ok_or_else(|| {
            ProviderError::InvalidResponse(format!(
                "confidence level {} outside [0, 100]",
                self.confidence_level
            ))
        })?;

        Ok(Analysis::new(
            request.score,
            self.subject,
            tier,
            self.strengths,
            self.areas_for_improvement,
            self.next_steps,
            confidence,
        ))
    }
}

impl From<&Analysis> for AnalysisPayload {
    fn from(analysis: &Analysis) -> Self {
        Self {
            score: analysis.score().value(),
            playlist_recommendation: analysis.playlist_recommendation(),
            subject: analysis.subject().to_string(),
            strengths: analysis.strengths().to_vec(),
            areas_for_improvement: analysis.areas_for_improvement().to_vec(),
            next_steps: analysis.next_steps().to_vec(),
            confidence_level: analysis.confidence().value(),
        }
    }
}
