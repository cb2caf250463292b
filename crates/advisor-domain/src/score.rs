//! Score module - validated test results

use std::fmt;

/// Lowest valid score (inclusive)
pub const MIN_SCORE: f64 = 0.0;

/// Highest valid score (inclusive)
pub const MAX_SCORE: f64 = 100.0;

/// A test score in the closed interval `[0, 100]`
///
/// Integers and fractional values are both accepted. NaN and infinities are
/// rejected along with anything outside the range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    /// Validate a raw value
    pub fn new(value: f64) -> Result<Self, InvalidScore> {
        if (MIN_SCORE..=MAX_SCORE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidScore { value })
        }
    }

    /// Get the raw value
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Score {
    type Error = InvalidScore;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a score falls outside `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidScore {
    /// The rejected value
    pub value: f64,
}

impl fmt::Display for InvalidScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score must be between {} and {}, got {}",
            MIN_SCORE, MAX_SCORE, self.value
        )
    }
}

impl std::error::Error for InvalidScore {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_accepts_closed_range() {
        assert_eq!(Score::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Score::new(100.0).unwrap().value(), 100.0);
        assert_eq!(Score::new(57.25).unwrap().value(), 57.25);
    }

    #[test]
    fn test_score_rejects_out_of_range() {
        assert!(Score::new(-1.0).is_err());
        assert!(Score::new(101.0).is_err());
        assert!(Score::new(100.0001).is_err());
        assert!(Score::new(-0.5).is_err());
    }

    #[test]
    fn test_score_rejects_non_finite() {
        assert!(Score::new(f64::NAN).is_err());
        assert!(Score::new(f64::INFINITY).is_err());
        assert!(Score::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_invalid_score_message_states_range() {
        let err = Score::new(101.0).unwrap_err();
        assert_eq!(err.to_string(), "Score must be between 0 and 100, got 101");
    }

    #[test]
    fn test_score_display_keeps_integers_plain() {
        assert_eq!(Score::new(15.0).unwrap().to_string(), "15");
        assert_eq!(Score::new(57.5).unwrap().to_string(), "57.5");
    }
}
