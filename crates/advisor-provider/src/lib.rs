//! Playlist Advisor Provider Layer
//!
//! Implementations of the `AnalysisProvider` trait from `advisor-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `HttpProvider`: Remote JSON analysis service over HTTP
//!
//! Every provider makes a single attempt per request; falling back to the
//! local analysis is the caller's job (see `advisor-analyzer`).
//!
//! # Examples
//!
//! ```
//! use advisor_domain::{build_local_analysis, AnalysisProvider, AnalysisRequest, Score};
//! use advisor_provider::MockProvider;
//!
//! let canned = build_local_analysis(83.0, Some("Physics")).unwrap();
//! let provider = MockProvider::new(canned.clone());
//!
//! let request = AnalysisRequest::new(Score::new(83.0).unwrap(), Some("Physics"));
//! assert_eq!(provider.fetch_analysis(&request).unwrap(), canned);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod http;
pub mod wire;

use advisor_domain::{Analysis, AnalysisProvider, AnalysisRequest};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use config::ProviderConfig;
pub use http::HttpProvider;
pub use wire::{AnalysisPayload, DEFAULT_MODEL};

/// Errors that can occur while talking to an analysis provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Network or transport failure (DNS, refused connection, reset)
    #[error("Communication error: {0}")]
    Transport(String),

    /// No response within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Service answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, if readable
        body: String,
    },

    /// Response could not be decoded into an analysis
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Provider could not be constructed from its configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<serde_json::Error> for ProviderError {
    fn from(e: serde_json::Error) -> Self {
        ProviderError::InvalidResponse(format!("Failed to parse response: {}", e))
    }
}

/// Mock analysis provider for deterministic testing
///
/// Returns pre-configured analyses without making any network calls. Clones
/// share their call log.
///
/// # Examples
///
/// ```
/// use advisor_domain::{AnalysisProvider, AnalysisRequest, Score};
/// use advisor_provider::{MockProvider, ProviderError};
///
/// let provider = MockProvider::unavailable();
/// let request = AnalysisRequest::new(Score::new(50.0).unwrap(), None);
///
/// assert!(matches!(
///     provider.fetch_analysis(&request),
///     Err(ProviderError::Transport(_))
/// ));
/// assert_eq!(provider.call_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: Option<Analysis>,
    responses: HashMap<String, Option<Analysis>>,
    call_count: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<AnalysisRequest>>>,
}

impl MockProvider {
    /// Create a mock that answers every request with the same analysis
    pub fn new(response: Analysis) -> Self {
        Self::with_default(Some(response))
    }

    /// Create a mock that fails every request with a transport error
    pub fn unavailable() -> Self {
        Self::with_default(None)
    }

    fn with_default(default_response: Option<Analysis>) -> Self {
        Self {
            default_response,
            responses: HashMap::new(),
            call_count: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer requests for a specific subject with the given analysis
    pub fn add_response(&mut self, subject: impl Into<String>, response: Analysis) {
        self.responses.insert(subject.into(), Some(response));
    }

    /// Fail requests for a specific subject
    pub fn add_error(&mut self, subject: impl Into<String>) {
        self.responses.insert(subject.into(), None);
    }

    /// Get the number of times `fetch_analysis` was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<AnalysisRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Reset the call log
    pub fn reset(&self) {
        self.call_count.store(0, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl AnalysisProvider for MockProvider {
    type Error = ProviderError;

    fn fetch_analysis(&self, request: &AnalysisRequest) -> Result<Analysis, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request.clone());

        let response = match self.responses.get(&request.subject) {
            Some(response) => response,
            None => &self.default_response,
        };

        response
            .clone()
            .ok_or_else(|| ProviderError::Transport("Mock provider unavailable".to_string()))
    }
}
