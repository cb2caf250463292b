//! Static recommendation tables
//!
//! Strengths and improvement areas are keyed by [`ScoreBand`]; next steps are
//! keyed by [`Tier`]. The two keys differ: the bands split at 40/60/80 only,
//! so Beginner and Elementary scores share the lowest band.

use crate::score::Score;
use crate::tier::Tier;

/// Threshold band used for strengths and improvement areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// Below 40
    Foundational,
    /// 40 up to 60
    Developing,
    /// 60 up to 80
    Proficient,
    /// 80 and above
    Mastery,
}

impl ScoreBand {
    /// Select the band for a validated score
    pub fn for_score(score: Score) -> Self {
        let value = score.value();
        if value >= 80.0 {
            ScoreBand::Mastery
        } else if value >= 60.0 {
            ScoreBand::Proficient
        } else if value >= 40.0 {
            ScoreBand::Developing
        } else {
            ScoreBand::Foundational
        }
    }

    /// Strengths observed at this band
    pub fn strengths(&self) -> &'static [&'static str] {
        match self {
            ScoreBand::Mastery => &[
                "Strong foundational knowledge",
                "Excellent problem-solving skills",
                "High accuracy",
            ],
            ScoreBand::Proficient => &[
                "Good understanding of concepts",
                "Solid application skills",
                "Consistent performance",
            ],
            ScoreBand::Developing => &[
                "Basic knowledge retention",
                "Partial understanding of key concepts",
            ],
            ScoreBand::Foundational => &[
                "Willingness to learn",
                "Recognition of knowledge gaps",
            ],
        }
    }

    /// Areas to work on at this band
    pub fn improvement_areas(&self) -> &'static [&'static str] {
        match self {
            ScoreBand::Mastery => &["Advanced applications", "Complex problem scenarios"],
            ScoreBand::Proficient => &[
                "Conceptual depth",
                "Application in novel situations",
                "Time management",
            ],
            ScoreBand::Developing => &[
                "Fundamental concepts",
                "Basic application skills",
                "Practice needed",
            ],
            ScoreBand::Foundational => &[
                "Basic foundational knowledge",
                "Core concept understanding",
                "Regular practice",
            ],
        }
    }
}

/// Next steps recommended for a tier
pub fn next_steps(tier: Tier) -> &'static [&'static str] {
    match tier {
        Tier::Beginner => &[
            "Start with foundational concepts",
            "Focus on basic terminology and principles",
            "Practice with simple exercises daily",
        ],
        Tier::Elementary => &[
            "Review basic concepts",
            "Begin applying knowledge to simple problems",
            "Build consistency in practice",
        ],
        Tier::Intermediate => &[
            "Strengthen conceptual understanding",
            "Practice with varied problem types",
            "Work on time management",
        ],
        Tier::Advanced => &[
            "Tackle complex problems",
            "Focus on application in real-world scenarios",
            "Develop advanced strategies",
        ],
        Tier::Expert => &[
            "Master nuanced applications",
            "Explore advanced topics beyond curriculum",
            "Consider mentoring others",
        ],
    }
}
