//! Playlist Advisor CLI - Recommend a study playlist from test scores.

use advisor_cli::cli::ReportArgs;
use advisor_cli::commands;
use advisor_cli::logging;
use advisor_cli::{Cli, Command, Config, Formatter};
use clap::Parser;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> advisor_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config and apply command-line overrides
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(cli.api_key, cli.endpoint);
    config.validate()?;

    logging::init(&config.settings.log_level, cli.verbose)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    // No subcommand runs the default report
    match cli.command.unwrap_or_else(|| Command::Report(ReportArgs::default())) {
        Command::Config(args) => {
            commands::execute_config(args, &config, cli.config.as_deref(), &formatter)?;
        }
        Command::Classify(args) => {
            commands::execute_classify(args, &formatter)?;
        }
        Command::Analyze(args) => {
            let analyzer = commands::build_analyzer(&config.provider, cli.offline)?;
            commands::execute_analyze(args, &analyzer, &config.settings.subject, &formatter)?;
        }
        Command::Report(args) => {
            let analyzer = commands::build_analyzer(&config.provider, cli.offline)?;
            commands::execute_report(args, &analyzer, &config.settings, &formatter)?;
        }
    }

    Ok(())
}
