//! Configuration for the remote analysis provider

use crate::wire::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default analysis service endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.example.com/analyze";

/// Default timeout for a single analysis request (10 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the remote analysis provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Whether to attempt the remote service at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Analyze endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bearer token; remote analysis is skipped without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model identifier sent with each request
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The API key, if one is set and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Whether a remote call should be attempted
    pub fn is_active(&self) -> bool {
        self.enabled && self.api_key().is_some()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(format!("endpoint must be an http(s) URL, got '{}'", self.endpoint));
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_endpoint(),
            api_key: None,
            model: default_model(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ProviderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.model, "score_analyzer_v1");
    }

    #[test]
    fn test_inactive_without_api_key() {
        let mut config = ProviderConfig::default();
        assert!(!config.is_active());

        config.api_key = Some("   ".to_string());
        assert!(!config.is_active());

        config.api_key = Some("secret".to_string());
        assert!(config.is_active());

        config.enabled = false;
        assert!(!config.is_active());
    }

    #[test]
    fn test_invalid_timeout() {
        let mut config = ProviderConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_endpoint() {
        let mut config = ProviderConfig::default();
        config.endpoint = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.endpoint = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ProviderConfig::from_toml("api_key = \"abc\"\ntimeout_secs = 3\n").unwrap();
        assert_eq!(config.api_key(), Some("abc"));
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.enabled);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ProviderConfig::default();
        config.api_key = Some("key".to_string());
        let toml_str = config.to_toml().unwrap();
        let parsed = ProviderConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
