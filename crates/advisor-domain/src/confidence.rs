//! Confidence module

use crate::score::Score;
use std::fmt;

/// Upper cap applied to local confidence
pub const MAX_CONFIDENCE: f64 = 95.0;

/// Confidence assigned to a score of zero
pub const BASE_CONFIDENCE: f64 = 50.0;

/// Certainty of an analysis, as a percentage
///
/// Local analyses derive it as `min(score / 2 + 50, 95)`, so it always lies in
/// `[50, 95]`. Remote analyses may carry any value in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Confidence(f64);

impl Confidence {
    /// Derive the local confidence for a score
    pub fn from_score(score: Score) -> Self {
        Self((score.value() / 2.0 + BASE_CONFIDENCE).min(MAX_CONFIDENCE))
    }

    /// Wrap a confidence reported by an external source
    ///
    /// Returns `None` unless the value is finite and within `[0, 100]`.
    pub fn from_percent(value: f64) -> Option<Self> {
        (0.0..=100.0).contains(&value).then_some(Self(value))
    }

    /// Get the percentage
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: local confidence stays within [50, 95]
        #[test]
        fn test_confidence_range(score in 0.0f64..=100.0) {
            let value = Confidence::from_score(Score::new(score).unwrap()).value();
            prop_assert!((BASE_CONFIDENCE..=MAX_CONFIDENCE).contains(&value));
        }

        /// Property: confidence is non-decreasing in score
        #[test]
        fn test_confidence_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let low = Confidence::from_score(Score::new(low).unwrap());
            let high = Confidence::from_score(Score::new(high).unwrap());
            prop_assert!(low <= high);
        }
    }
}
