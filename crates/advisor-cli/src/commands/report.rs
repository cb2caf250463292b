//! Report command implementation.

use crate::cli::ReportArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::output::{Formatter, ReportEntry};
use advisor_analyzer::Analyzer;
use advisor_domain::AnalysisProvider;
use std::fmt::Display;
use tracing::info;

/// Execute the report command.
pub fn execute_report<P>(
    args: ReportArgs,
    analyzer: &Analyzer<P>,
    settings: &Settings,
    formatter: &Formatter,
) -> Result<()>
where
    P: AnalysisProvider,
    P::Error: Display,
{
    let scores = if args.scores.is_empty() {
        settings.scores.clone()
    } else {
        args.scores
    };
    let subject = args.subject.unwrap_or_else(|| settings.subject.clone());

    let entries = build_report(analyzer, &scores, &subject);
    println!("{}", formatter.format_report(&entries)?);
    Ok(())
}

/// Analyse every score; an invalid score is recorded and the rest continue.
pub fn build_report<P>(analyzer: &Analyzer<P>, scores: &[f64], subject: &str) -> Vec<ReportEntry>
where
    P: AnalysisProvider,
    P::Error: Display,
{
    let entries: Vec<ReportEntry> = scores
        .iter()
        .map(|&score| ReportEntry {
            score,
            outcome: analyzer.assess(score, Some(subject)),
        })
        .collect();

    let failed = entries.iter().filter(|e| e.outcome.is_err()).count();
    info!(
        "Report complete: {} analysed, {} rejected",
        entries.len() - failed,
        failed
    );
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_domain::{build_local_analysis, Tier};
    use advisor_provider::MockProvider;

    #[test]
    fn test_report_continues_past_invalid_scores() {
        let provider = MockProvider::unavailable();
        let analyzer = Analyzer::new(provider.clone());

        let entries = build_report(&analyzer, &[15.0, -1.0, 101.0, 92.0], "Mathematics");

        assert_eq!(entries.len(), 4);
        assert!(entries[1].outcome.is_err());
        assert!(entries[2].outcome.is_err());

        let first = entries[0].outcome.as_ref().unwrap();
        assert_eq!(
            first.analysis,
            build_local_analysis(15.0, Some("Mathematics")).unwrap()
        );
        let last = entries[3].outcome.as_ref().unwrap();
        assert_eq!(last.analysis.tier(), Tier::Expert);

        // Invalid scores never reach the provider
        assert_eq!(provider.call_count(), 2);
    }

    #[test]
    fn test_default_scores_cover_every_tier() {
        let analyzer: Analyzer<MockProvider> = Analyzer::local_only();
        let settings = Settings::default();

        let entries = build_report(&analyzer, &settings.scores, &settings.subject);
        let tiers: Vec<Tier> = entries
            .iter()
            .map(|e| e.outcome.as_ref().unwrap().analysis.tier())
            .collect();

        assert_eq!(
            tiers,
            vec![
                Tier::Beginner,
                Tier::Elementary,
                Tier::Intermediate,
                Tier::Advanced,
                Tier::Expert,
                Tier::Expert
            ]
        );
    }
}
