//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::error::Result;
use crate::output::Formatter;
use advisor_analyzer::{Analyzer, Assessment};
use advisor_domain::AnalysisProvider;
use std::fmt::Display;

/// Execute the analyze command.
pub fn execute_analyze<P>(
    args: AnalyzeArgs,
    analyzer: &Analyzer<P>,
    default_subject: &str,
    formatter: &Formatter,
) -> Result<()>
where
    P: AnalysisProvider,
    P::Error: Display,
{
    let assessment = assess(&args, analyzer, default_subject)?;
    println!("{}", formatter.format_assessment(&assessment)?);
    Ok(())
}

fn assess<P>(args: &AnalyzeArgs, analyzer: &Analyzer<P>, default_subject: &str) -> Result<Assessment>
where
    P: AnalysisProvider,
    P::Error: Display,
{
    let subject = args.subject.as_deref().unwrap_or(default_subject);
    Ok(analyzer.assess(args.score, Some(subject))?)
}
