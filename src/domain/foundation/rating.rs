//! Rating value object for the 1-10 slider scale.
//!
//! Used for evidence importance ratings, stance strength, and framing
//! likelihood/quality responses.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A slider response between 1 and 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Lowest possible rating.
    pub const MIN: Self = Self(1);

    /// Highest possible rating.
    pub const MAX: Self = Self(10);

    /// The neutral midpoint the sliders start on.
    pub const MIDPOINT: Self = Self(5);

    /// Creates a Rating, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=10).contains(&value) {
            return Err(ValidationError::out_of_range(
                "rating",
                1.0,
                10.0,
                f64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as f64, for averaging.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::MIDPOINT
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

/// Mean of a slice of ratings; 0.0 for an empty slice.
///
/// The empty-group convention matters for bias scoring: a scenario where the
/// user rated no supporting (or no contradicting) items still gets a score,
/// with the empty side contributing zero.
pub fn mean_rating(ratings: &[Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    ratings.iter().map(Rating::as_f64).sum::<f64>() / ratings.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_try_new_accepts_valid_values() {
        assert_eq!(Rating::try_new(1).unwrap(), Rating::MIN);
        assert_eq!(Rating::try_new(5).unwrap(), Rating::MIDPOINT);
        assert_eq!(Rating::try_new(10).unwrap(), Rating::MAX);
    }

    #[test]
    fn rating_try_new_rejects_out_of_range() {
        assert!(Rating::try_new(0).is_err());
        assert!(Rating::try_new(11).is_err());
        assert!(Rating::try_new(255).is_err());
    }

    #[test]
    fn rating_default_is_midpoint() {
        assert_eq!(Rating::default().value(), 5);
    }

    #[test]
    fn rating_displays_with_scale() {
        assert_eq!(format!("{}", Rating::try_new(7).unwrap()), "7/10");
    }

    #[test]
    fn rating_serializes_as_number() {
        let json = serde_json::to_string(&Rating::try_new(8).unwrap()).unwrap();
        assert_eq!(json, "8");
    }

    #[test]
    fn mean_rating_averages_values() {
        let ratings = [Rating::try_new(8).unwrap(), Rating::try_new(6).unwrap()];
        assert!((mean_rating(&ratings) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mean_rating_of_empty_slice_is_zero() {
        assert_eq!(mean_rating(&[]), 0.0);
    }
}
