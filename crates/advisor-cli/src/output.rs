//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use advisor_analyzer::{AnalyzerError, Assessment};
use advisor_domain::Tier;
use advisor_provider::AnalysisPayload;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Title printed above a text report.
pub const REPORT_TITLE: &str = "Test Score Analysis Results";

/// One line of a report: the input score and what came of it.
#[derive(Debug)]
pub struct ReportEntry {
    /// Score as given
    pub score: f64,
    /// Assessment, or the validation error for this score
    pub outcome: std::result::Result<Assessment, AnalyzerError>,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the result of `classify`.
    pub fn format_classification(&self, score: f64, tier: Tier) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "score": score,
                "tier": tier.as_str(),
                "playlist_recommendation": tier.playlist_label(),
            }))?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Score", "Tier", "Playlist"]);
                builder.push_record([score.to_string(), tier.to_string(), tier.playlist_label()]);
                Ok(self.render(builder))
            }
            OutputFormat::Text => Ok(format!(
                "Score {}/100 → {}",
                score,
                self.colorize(&tier.playlist_label(), "cyan")
            )),
            OutputFormat::Quiet => Ok(tier.playlist_label()),
        }
    }

    /// Format a single assessment.
    pub fn format_assessment(&self, assessment: &Assessment) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&assessment_json(assessment)?)?),
            OutputFormat::Table => Ok(self.assessment_table(assessment)),
            OutputFormat::Text => Ok(self.assessment_text(assessment)),
            OutputFormat::Quiet => Ok(assessment.analysis.playlist_recommendation()),
        }
    }

    /// Format a full report.
    pub fn format_report(&self, entries: &[ReportEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(entries),
            OutputFormat::Table => Ok(self.format_report_table(entries)),
            OutputFormat::Text => Ok(self.format_report_text(entries)),
            OutputFormat::Quiet => Ok(self.format_report_quiet(entries)),
        }
    }

    /// Format a report as JSON.
    fn format_report_json(&self, entries: &[ReportEntry]) -> Result<String> {
        let items = entries
            .iter()
            .map(|entry| match &entry.outcome {
                Ok(assessment) => assessment_json(assessment),
                Err(e) => Ok(serde_json::json!({
                    "score": entry.score,
                    "error": e.to_string(),
                })),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(serde_json::to_string_pretty(&items)?)
    }

    /// Format a report as a summary table.
    fn format_report_table(&self, entries: &[ReportEntry]) -> String {
        if entries.is_empty() {
            return self.colorize("No scores to analyse.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Score", "Playlist", "Subject", "Confidence", "Source"]);

        for entry in entries {
            match &entry.outcome {
                Ok(assessment) => {
                    let analysis = &assessment.analysis;
                    builder.push_record([
                        entry.score.to_string(),
                        analysis.playlist_recommendation(),
                        analysis.subject().to_string(),
                        analysis.confidence().to_string(),
                        assessment.source.to_string(),
                    ]);
                }
                Err(e) => {
                    builder.push_record([
                        entry.score.to_string(),
                        format!("Error: {}", e),
                        "-".to_string(),
                        "-".to_string(),
                        "-".to_string(),
                    ]);
                }
            }
        }

        self.render(builder)
    }

    /// Format a report in the plain text layout.
    fn format_report_text(&self, entries: &[ReportEntry]) -> String {
        let mut out = String::new();
        out.push_str(&self.colorize(REPORT_TITLE, "cyan"));
        out.push('\n');
        out.push_str(&"=".repeat(50));
        out.push('\n');

        for entry in entries {
            match &entry.outcome {
                Ok(assessment) => out.push_str(&self.assessment_text(assessment)),
                Err(e) => {
                    out.push_str(&self.error(&format!("Error analyzing score {}: {}", entry.score, e)));
                    out.push('\n');
                }
            }
        }

        out.trim_end().to_string()
    }

    /// Format a report in quiet mode (one label per score).
    fn format_report_quiet(&self, entries: &[ReportEntry]) -> String {
        entries
            .iter()
            .map(|entry| match &entry.outcome {
                Ok(assessment) => assessment.analysis.playlist_recommendation(),
                Err(_) => "error".to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render one assessment as a labelled block.
    fn assessment_text(&self, assessment: &Assessment) -> String {
        let analysis = &assessment.analysis;
        let mut out = String::new();

        out.push_str(&format!("\nScore: {}/100\n", analysis.score()));
        out.push_str(&format!(
            "{} {}\n",
            self.colorize("Playlist Recommendation:", "cyan"),
            analysis.playlist_recommendation()
        ));
        out.push_str(&format!("Subject: {}\n", analysis.subject()));

        for (heading, items) in [
            ("Strengths:", analysis.strengths()),
            ("Areas for Improvement:", analysis.areas_for_improvement()),
            ("Recommended Next Steps:", analysis.next_steps()),
        ] {
            out.push_str(heading);
            out.push('\n');
            for item in items {
                out.push_str(&format!("  - {}\n", item));
            }
        }

        out.push_str(&format!("Analysis Confidence: {}\n", analysis.confidence()));
        out.push_str(&"-".repeat(30));
        out.push('\n');
        out
    }

    /// Render one assessment as a two-column table.
    fn assessment_table(&self, assessment: &Assessment) -> String {
        let analysis = &assessment.analysis;
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Score".to_string(), format!("{}/100", analysis.score())]);
        builder.push_record(["Playlist".to_string(), analysis.playlist_recommendation()]);
        builder.push_record(["Subject".to_string(), analysis.subject().to_string()]);
        builder.push_record(["Strengths".to_string(), analysis.strengths().join("\n")]);
        builder.push_record([
            "Areas for Improvement".to_string(),
            analysis.areas_for_improvement().join("\n"),
        ]);
        builder.push_record(["Next Steps".to_string(), analysis.next_steps().join("\n")]);
        builder.push_record(["Confidence".to_string(), analysis.confidence().to_string()]);
        builder.push_record(["Source".to_string(), assessment.source.to_string()]);

        self.render(builder)
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(message, "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// JSON object for an assessment: the wire payload plus its source.
fn assessment_json(assessment: &Assessment) -> Result<serde_json::Value> {
    let mut value = serde_json::to_value(AnalysisPayload::from(&assessment.analysis))?;
    if let Some(object) = value.as_object_mut() {
        object.insert(
            "source".to_string(),
            serde_json::Value::String(assessment.source.to_string()),
        );
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_analyzer::AnalysisSource;
    use advisor_domain::{build_local_analysis, InvalidScore};

    fn local(score: f64) -> Assessment {
        Assessment {
            analysis: build_local_analysis(score, Some("Mathematics")).unwrap(),
            source: AnalysisSource::Local {
                fallback_reason: None,
            },
        }
    }

    fn sample_report() -> Vec<ReportEntry> {
        vec![
            ReportEntry {
                score: 15.0,
                outcome: Ok(local(15.0)),
            },
            ReportEntry {
                score: 105.0,
                outcome: Err(AnalyzerError::InvalidScore(InvalidScore { value: 105.0 })),
            },
            ReportEntry {
                score: 92.0,
                outcome: Ok(local(92.0)),
            },
        ]
    }

    #[test]
    fn test_text_assessment_layout() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter.format_assessment(&local(15.0)).unwrap();

        let expected = "
Score: 15/100
Playlist Recommendation: Playlist 1 (Beginner)
Subject: Mathematics
Strengths:
  - Willingness to learn
  - Recognition of knowledge gaps
Areas for Improvement:
  - Basic foundational knowledge
  - Core concept understanding
  - Regular practice
Recommended Next Steps:
  - Start with foundational concepts
  - Focus on basic terminology and principles
  - Practice with simple exercises daily
Analysis Confidence: 57.5%
------------------------------
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_text_report_continues_after_error() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.starts_with("Test Score Analysis Results\n=================================================="));
        assert!(output.contains("Error analyzing score 105: Score must be between 0 and 100, got 105"));
        assert!(output.contains("Playlist 5 (Expert)"));
        assert!(output.contains("Analysis Confidence: 95.0%"));
    }

    #[test]
    fn test_json_report() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_report(&sample_report()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["playlist_recommendation"], "Playlist 1 (Beginner)");
        assert_eq!(items[0]["confidence_level"], 57.5);
        assert_eq!(items[0]["source"], "local");
        assert!(items[1]["error"].as_str().unwrap().contains("between 0 and 100"));
        assert_eq!(items[2]["next_steps"][2], "Consider mentoring others");
    }

    #[test]
    fn test_table_report() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("Playlist"));
        assert!(output.contains("Confidence"));
        assert!(output.contains("Playlist 1 (Beginner)"));
        assert!(output.contains("Error: Score must be between 0 and 100"));
    }

    #[test]
    fn test_empty_table_report() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&[]).unwrap();
        assert!(output.contains("No scores to analyse"));
    }

    #[test]
    fn test_quiet_report() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert_eq!(output, "Playlist 1 (Beginner)\nerror\nPlaylist 5 (Expert)");
    }

    #[test]
    fn test_assessment_table_shows_source() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_assessment(&local(65.0)).unwrap();
        assert!(output.contains("Playlist 4 (Advanced)"));
        assert!(output.contains("Source"));
        assert!(output.contains("local"));
    }

    #[test]
    fn test_classification_formats() {
        let quiet = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(
            quiet.format_classification(47.0, Tier::Intermediate).unwrap(),
            "Playlist 3 (Intermediate)"
        );

        let text = Formatter::new(OutputFormat::Text, false);
        assert_eq!(
            text.format_classification(80.0, Tier::Expert).unwrap(),
            "Score 80/100 → Playlist 5 (Expert)"
        );

        let json = Formatter::new(OutputFormat::Json, false);
        let value: serde_json::Value =
            serde_json::from_str(&json.format_classification(20.0, Tier::Elementary).unwrap()).unwrap();
        assert_eq!(value["tier"], "Elementary");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.info("test"), "ℹ test");
    }
}
