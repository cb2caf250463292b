//! Tracing subscriber setup.

use crate::error::{CliError, Result};
use tracing_subscriber::EnvFilter;

/// Pick the log filter for a verbosity count.
///
/// `-v` raises the configured level to `info`, `-vv` to `debug`.
pub fn filter_directive(configured: &str, verbosity: u8) -> &str {
    match verbosity {
        0 => configured,
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the configured level and `-v` flags.
pub fn init(configured: &str, verbosity: u8) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directive = filter_directive(configured, verbosity);
            EnvFilter::try_new(directive).map_err(|e| {
                CliError::Logging(format!("invalid log level '{}': {}", directive, e))
            })?
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
