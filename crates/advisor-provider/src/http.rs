//! HTTP Provider Implementation
//!
//! Sends a score to the remote analysis service and decodes the
//! analysis-shaped JSON it returns.
//!
//! # Features
//!
//! - Bearer-token authorization
//! - Configurable endpoint, model and timeout
//! - Exactly one attempt per request (no retries)
//!
//! # Examples
//!
//! ```no_run
//! use advisor_domain::{AnalysisProvider, AnalysisRequest, Score};
//! use advisor_provider::HttpProvider;
//!
//! let provider = HttpProvider::new("https://api.example.com/analyze", "my-key").unwrap();
//! let request = AnalysisRequest::new(Score::new(65.0).unwrap(), Some("Mathematics"));
//! let analysis = provider.fetch_analysis(&request);
//! ```

use crate::config::{ProviderConfig, DEFAULT_TIMEOUT_SECS};
use crate::wire::{AnalysisPayload, AnalyzeRequestBody, DEFAULT_MODEL};
use crate::ProviderError;
use advisor_domain::{Analysis, AnalysisProvider, AnalysisRequest};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Remote analysis service client
pub struct HttpProvider {
    endpoint: String,
    api_key: String,
    model: String,
    timeout: Duration,
    client: reqwest::blocking::Client,
}

impl HttpProvider {
    /// Create a new HTTP provider with the default model and timeout
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Full URL of the analyze endpoint
    /// - `api_key`: Token sent as `Authorization: Bearer <api_key>`
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| ProviderError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            client,
        })
    }

    /// Create a provider from validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Configuration`] if the configuration is
    /// invalid or has no API key.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        config.validate().map_err(ProviderError::Configuration)?;
        let api_key = config
            .api_key()
            .ok_or_else(|| ProviderError::Configuration("api_key is not set".to_string()))?;

        Ok(Self::new(config.endpoint.as_str(), api_key)?
            .with_model(config.model.as_str())
            .with_timeout(config.timeout()))
    }

    /// Set the model identifier sent with each request
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Analyze endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Model identifier
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Request an analysis from the service
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The service is unreachable or the connection fails
    /// - No response arrives within the timeout
    /// - The service answers with a non-success status
    /// - The response body is not a valid analysis payload
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<Analysis, ProviderError> {
        let body = AnalyzeRequestBody::new(request, &self.model);
        debug!(
            "Requesting remote analysis from {} (score {}, subject '{}')",
            self.endpoint, request.score, request.subject
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text()?;
        let payload: AnalysisPayload = serde_json::from_str(&text)?;
        payload.into_analysis(request)
    }
}

impl fmt::Debug for HttpProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpProvider")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AnalysisProvider for HttpProvider {
    type Error = ProviderError;

    fn fetch_analysis(&self, request: &AnalysisRequest) -> Result<Analysis, Self::Error> {
        self.analyze(request)
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout
        } else if e.is_decode() {
            ProviderError::InvalidResponse(e.to_string())
        } else if e.is_builder() {
            ProviderError::Configuration(e.to_string())
        } else {
            ProviderError::Transport(e.to_string())
        }
    }
}
