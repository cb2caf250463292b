//! Command implementations.

pub mod analyze;
pub mod classify;
pub mod config;
pub mod report;

pub use self::analyze::execute_analyze;
pub use self::classify::execute_classify;
pub use self::config::execute_config;
pub use self::report::{build_report, execute_report};

use crate::error::Result;
use advisor_analyzer::Analyzer;
use advisor_provider::{HttpProvider, ProviderConfig};
use tracing::debug;

/// Build the analyzer for analysis commands.
///
/// The remote provider is used only when it is enabled, has an API key, and
/// `offline` is false.
pub fn build_analyzer(config: &ProviderConfig, offline: bool) -> Result<Analyzer<HttpProvider>> {
    if offline {
        debug!("Offline mode, remote analysis disabled");
        return Ok(Analyzer::local_only());
    }
    if !config.is_active() {
        debug!(
            "Remote analysis not configured (enabled={}, api key set={})",
            config.enabled,
            config.api_key().is_some()
        );
        return Ok(Analyzer::local_only());
    }

    let provider = HttpProvider::from_config(config)?;
    debug!("Remote analysis via {}", provider.endpoint());
    Ok(Analyzer::new(provider))
}
