//! Analysis module - the recommendation record for a score

use crate::confidence::Confidence;
use crate::recommendations::{next_steps, ScoreBand};
use crate::score::{InvalidScore, Score};
use crate::tier::Tier;

/// Subject used when none is given
pub const DEFAULT_SUBJECT: &str = "General";

/// Recommendation analysis for a single score
///
/// Immutable once built. Local analyses come from [`build_local_analysis`];
/// providers assemble remote ones through [`Analysis::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    score: Score,
    subject: String,
    tier: Tier,
    strengths: Vec<String>,
    areas_for_improvement: Vec<String>,
    next_steps: Vec<String>,
    confidence: Confidence,
}

impl Analysis {
    /// Assemble an analysis from its parts
    pub fn new(
        score: Score,
        subject: impl Into<String>,
        tier: Tier,
        strengths: Vec<String>,
        areas_for_improvement: Vec<String>,
        next_steps: Vec<String>,
        confidence: Confidence,
    ) -> Self {
        Self {
            score,
            subject: subject.into(),
            tier,
            strengths,
            areas_for_improvement,
            next_steps,
            confidence,
        }
    }

    /// The analysed score
    pub fn score(&self) -> Score {
        self.score
    }

    /// Subject the score belongs to
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Recommended tier
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Display label of the recommended playlist
    pub fn playlist_recommendation(&self) -> String {
        self.tier.playlist_label()
    }

    /// Strengths, in display order
    pub fn strengths(&self) -> &[String] {
        &self.strengths
    }

    /// Areas for improvement, in display order
    pub fn areas_for_improvement(&self) -> &[String] {
        &self.areas_for_improvement
    }

    /// Recommended next steps, in display order
    pub fn next_steps(&self) -> &[String] {
        &self.next_steps
    }

    /// Confidence of the analysis
    pub fn confidence(&self) -> Confidence {
        self.confidence
    }
}

/// Build the deterministic local analysis for a score
///
/// `subject` defaults to [`DEFAULT_SUBJECT`]. No I/O is performed.
///
/// # Errors
/// Returns [`InvalidScore`] when the value is outside `[0, 100]`.
pub fn build_local_analysis(score: f64, subject: Option<&str>) -> Result<Analysis, InvalidScore> {
    let score = Score::new(score)?;
    let tier = Tier::for_score(score);
    let band = ScoreBand::for_score(score);

    Ok(Analysis::new(
        score,
        subject.unwrap_or(DEFAULT_SUBJECT),
        tier,
        owned_list(band.strengths()),
        owned_list(band.improvement_areas()),
        owned_list(next_steps(tier)),
        Confidence::from_score(score),
    ))
}

fn owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beginner_example() {
        let analysis = build_local_analysis(15.0, Some("Mathematics")).unwrap();

        assert_eq!(analysis.score().value(), 15.0);
        assert_eq!(analysis.subject(), "Mathematics");
        assert_eq!(analysis.tier(), Tier::Beginner);
        assert_eq!(analysis.playlist_recommendation(), "Playlist 1 (Beginner)");
        assert_eq!(
            analysis.strengths(),
            ["Willingness to learn", "Recognition of knowledge gaps"]
        );
        assert_eq!(
            analysis.areas_for_improvement(),
            [
                "Basic foundational knowledge",
                "Core concept understanding",
                "Regular practice"
            ]
        );
        assert_eq!(
            analysis.next_steps(),
            [
                "Start with foundational concepts",
                "Focus on basic terminology and principles",
                "Practice with simple exercises daily"
            ]
        );
        assert_eq!(analysis.confidence().value(), 57.5);
    }

    #[test]
    fn test_expert_example() {
        let analysis = build_local_analysis(92.0, Some("Mathematics")).unwrap();
        assert_eq!(analysis.tier(), Tier::Expert);
        assert_eq!(analysis.confidence().value(), 95.0);
        assert_eq!(analysis.strengths().len(), 3);
        assert_eq!(analysis.areas_for_improvement().len(), 2);
        assert_eq!(analysis.next_steps()[2], "Consider mentoring others");
    }

    #[test]
    fn test_elementary_uses_lowest_band_with_own_next_steps() {
        let analysis = build_local_analysis(32.0, None).unwrap();
        assert_eq!(analysis.tier(), Tier::Elementary);
        assert_eq!(analysis.strengths()[0], "Willingness to learn");
        assert_eq!(analysis.next_steps()[0], "Review basic concepts");
    }

    #[test]
    fn test_default_subject() {
        let analysis = build_local_analysis(65.0, None).unwrap();
        assert_eq!(analysis.subject(), DEFAULT_SUBJECT);
        assert_eq!(analysis.tier(), Tier::Advanced);
    }

    #[test]
    fn test_deterministic() {
        let first = build_local_analysis(47.0, Some("Physics")).unwrap();
        let second = build_local_analysis(47.0, Some("Physics")).unwrap();
        assert_eq!(first, second);
        assert_eq!(format!("{:?}", first), format!("{:?}", second));
    }

    #[test]
    fn test_invalid_score_propagates() {
        let err = build_local_analysis(101.0, Some("Mathematics")).unwrap_err();
        assert_eq!(err.value, 101.0);
        assert!(build_local_analysis(-1.0, None).is_err());
    }
}
