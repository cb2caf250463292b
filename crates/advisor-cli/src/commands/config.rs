//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            println!("{}", config.to_redacted_toml()?);
        }
        ConfigAction::Path => {
            println!("{}", Config::resolve_path(path)?.display());
        }
        ConfigAction::Init { force } => {
            let path = init_config(path, force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default configuration to {}", path.display()))
            );
        }
    }
    Ok(())
}

/// Write the default configuration, refusing to overwrite unless forced.
fn init_config(path: Option<&Path>, force: bool) -> Result<std::path::PathBuf> {
    let path = Config::resolve_path(path)?;
    if path.exists() && !force {
        return Err(CliError::NotPermitted(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Config::default().save_to(&path)?;
    Ok(path)
}
