//! Tier module - playlist recommendation bands

use crate::score::{InvalidScore, Score};
use std::fmt;

/// Playlist tier recommended for a score
///
/// Tiers partition the score domain into half-open bands, with the last band
/// closed at 100:
/// - Beginner: [0, 20)
/// - Elementary: [20, 40)
/// - Intermediate: [40, 60)
/// - Advanced: [60, 80)
/// - Expert: [80, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Playlist 1, scores below 20
    Beginner,

    /// Playlist 2, scores from 20 up to 40
    Elementary,

    /// Playlist 3, scores from 40 up to 60
    Intermediate,

    /// Playlist 4, scores from 60 up to 80
    Advanced,

    /// Playlist 5, scores from 80 through 100
    Expert,
}

impl Tier {
    /// All tiers in ascending order
    pub const ALL: [Tier; 5] = [
        Tier::Beginner,
        Tier::Elementary,
        Tier::Intermediate,
        Tier::Advanced,
        Tier::Expert,
    ];

    /// Classify a validated score. Boundary values belong to the higher tier.
    pub fn for_score(score: Score) -> Self {
        let value = score.value();
        if value < 20.0 {
            Tier::Beginner
        } else if value < 40.0 {
            Tier::Elementary
        } else if value < 60.0 {
            Tier::Intermediate
        } else if value < 80.0 {
            Tier::Advanced
        } else {
            Tier::Expert
        }
    }

    /// Get the tier name
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Beginner => "Beginner",
            Tier::Elementary => "Elementary",
            Tier::Intermediate => "Intermediate",
            Tier::Advanced => "Advanced",
            Tier::Expert => "Expert",
        }
    }

    /// Get the playlist number (1-5)
    pub fn playlist_number(&self) -> u8 {
        match self {
            Tier::Beginner => 1,
            Tier::Elementary => 2,
            Tier::Intermediate => 3,
            Tier::Advanced => 4,
            Tier::Expert => 5,
        }
    }

    /// Get the display label, e.g. `"Playlist 3 (Intermediate)"`
    pub fn playlist_label(&self) -> String {
        format!("Playlist {} ({})", self.playlist_number(), self.as_str())
    }

    /// Parse a tier from its name or its playlist label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Tier::ALL.into_iter().find(|tier| {
            s.eq_ignore_ascii_case(tier.as_str()) || s.eq_ignore_ascii_case(&tier.playlist_label())
        })
    }

    /// Get the next tier up, if any
    pub fn next(&self) -> Option<Self> {
        match self {
            Tier::Beginner => Some(Tier::Elementary),
            Tier::Elementary => Some(Tier::Intermediate),
            Tier::Intermediate => Some(Tier::Advanced),
            Tier::Advanced => Some(Tier::Expert),
            Tier::Expert => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid tier: {}", s))
    }
}

/// Classify a raw score into its playlist tier
///
/// # Errors
/// Returns [`InvalidScore`] when the value is outside `[0, 100]`.
pub fn classify(score: f64) -> Result<Tier, InvalidScore> {
    Score::new(score).map(Tier::for_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bands() {
        assert_eq!(classify(0.0).unwrap(), Tier::Beginner);
        assert_eq!(classify(19.99).unwrap(), Tier::Beginner);
        assert_eq!(classify(32.0).unwrap(), Tier::Elementary);
        assert_eq!(classify(47.0).unwrap(), Tier::Intermediate);
        assert_eq!(classify(65.0).unwrap(), Tier::Advanced);
        assert_eq!(classify(83.0).unwrap(), Tier::Expert);
    }

    #[test]
    fn test_classify_boundaries_go_up() {
        assert_eq!(classify(20.0).unwrap(), Tier::Elementary);
        assert_eq!(classify(40.0).unwrap(), Tier::Intermediate);
        assert_eq!(classify(60.0).unwrap(), Tier::Advanced);
        assert_eq!(classify(80.0).unwrap(), Tier::Expert);
        assert_eq!(classify(100.0).unwrap(), Tier::Expert);
    }

    #[test]
    fn test_classify_rejects_out_of_range() {
        assert_eq!(classify(-1.0), Err(InvalidScore { value: -1.0 }));
        assert_eq!(classify(101.0), Err(InvalidScore { value: 101.0 }));
    }

    #[test]
    fn test_playlist_labels() {
        assert_eq!(Tier::Beginner.playlist_label(), "Playlist 1 (Beginner)");
        assert_eq!(Tier::Intermediate.playlist_label(), "Playlist 3 (Intermediate)");
        assert_eq!(Tier::Expert.playlist_label(), "Playlist 5 (Expert)");
    }

    #[test]
    fn test_parse_accepts_name_and_label() {
        for tier in Tier::ALL {
            assert_eq!(Tier::parse(tier.as_str()), Some(tier));
            assert_eq!(Tier::parse(&tier.playlist_label()), Some(tier));
        }
        assert_eq!(Tier::parse("expert"), Some(Tier::Expert));
        assert_eq!(Tier::parse(" playlist 2 (elementary) "), Some(Tier::Elementary));
        assert_eq!(Tier::parse("Playlist 6 (Guru)"), None);
        assert!("master".parse::<Tier>().is_err());
    }

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::Beginner < Tier::Elementary);
        assert!(Tier::Advanced < Tier::Expert);
        assert_eq!(Tier::Advanced.next(), Some(Tier::Expert));
        assert_eq!(Tier::Expert.next(), None);
    }
}
