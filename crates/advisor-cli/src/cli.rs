//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Playlist Advisor - Recommend a study playlist from a test score.
#[derive(Debug, Parser)]
#[command(name = "advisor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip the remote analysis service and use local analysis only
    #[arg(long, global = true)]
    pub offline: bool,

    /// API key for the remote analysis service
    #[arg(long, global = true, env = "ADVISOR_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Remote analysis endpoint URL
    #[arg(long, global = true, env = "ADVISOR_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Report text (default)
    Text,
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet format (playlist labels only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the playlist tier for a score
    Classify(ClassifyArgs),

    /// Analyse a single score
    Analyze(AnalyzeArgs),

    /// Analyse a list of scores (default command)
    Report(ReportArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Test score (0-100)
    #[arg(allow_negative_numbers = true)]
    pub score: f64,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Test score (0-100)
    #[arg(allow_negative_numbers = true)]
    pub score: f64,

    /// Subject of the test
    #[arg(short, long)]
    pub subject: Option<String>,
}

/// Arguments for the report command.
#[derive(Debug, Default, Parser)]
pub struct ReportArgs {
    /// Test scores (defaults to the configured list)
    #[arg(allow_negative_numbers = true)]
    pub scores: Vec<f64>,

    /// Subject of the tests
    #[arg(short, long)]
    pub subject: Option<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration (API key masked)
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
