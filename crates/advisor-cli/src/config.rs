//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use advisor_domain::DEFAULT_SUBJECT;
use advisor_provider::ProviderConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Scores analysed by `report` when none are given.
pub const DEFAULT_SCORES: [f64; 6] = [15.0, 32.0, 47.0, 65.0, 83.0, 92.0];

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Remote analysis provider
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Subject used when none is given
    #[serde(default = "default_subject")]
    pub subject: String,

    /// Scores analysed by `report` when none are given
    #[serde(default = "default_scores")]
    pub scores: Vec<f64>,

    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain report text
    Text,
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (playlist label only)
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".advisor").join("config.toml"))
    }

    /// Resolve an explicit path or fall back to the default one.
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Serialize to TOML with the API key masked.
    pub fn to_redacted_toml(&self) -> Result<String> {
        let mut redacted = self.clone();
        if redacted.provider.api_key.is_some() {
            redacted.provider.api_key = Some("********".to_string());
        }
        redacted.to_toml()
    }

    /// Apply command-line overrides.
    pub fn apply_overrides(&mut self, api_key: Option<String>, endpoint: Option<String>) {
        if let Some(api_key) = api_key {
            self.provider.api_key = Some(api_key);
        }
        if let Some(endpoint) = endpoint {
            self.provider.endpoint = endpoint;
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.provider
            .validate()
            .map_err(|e| CliError::Config(format!("[provider] {}", e)))?;

        if self.settings.subject.trim().is_empty() {
            return Err(CliError::Config("[settings] subject must not be empty".into()));
        }
        if self.settings.log_level.trim().is_empty() {
            return Err(CliError::Config("[settings] log_level must not be empty".into()));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
            subject: default_subject(),
            scores: default_scores(),
            log_level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

fn default_scores() -> Vec<f64> {
    DEFAULT_SCORES.to_vec()
}

fn default_log_level() -> String {
    "warn".to_string()
}
