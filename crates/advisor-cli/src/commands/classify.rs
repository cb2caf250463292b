//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::error::Result;
use crate::output::Formatter;
use advisor_domain::classify;

/// Execute the classify command.
pub fn execute_classify(args: ClassifyArgs, formatter: &Formatter) -> Result<()> {
    let tier = classify(args.score)?;
    println!("{}", formatter.format_classification(args.score, tier)?);
    Ok(())
}
