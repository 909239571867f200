//! Anchor-pull scoring - pure functions over recorded inputs.

use serde::{Deserialize, Serialize};

/// The user's higher/lower call about the actual value versus the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessDirection {
    Higher,
    Lower,
}

impl GuessDirection {
    pub fn label(&self) -> &'static str {
        match self {
            GuessDirection::Higher => "higher",
            GuessDirection::Lower => "lower",
        }
    }
}

/// How strongly the anchor shows in an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchoringEffect {
    /// The estimate landed closer to the anchor than to the actual value.
    Strong,
    /// The estimate was biased toward the anchor's side of the actual value.
    Moderate,
    /// The estimate did not follow the anchor's direction.
    NoClearEffect,
}

impl AnchoringEffect {
    pub fn label(&self) -> &'static str {
        match self {
            AnchoringEffect::Strong => "Strong Effect",
            AnchoringEffect::Moderate => "Moderate Effect",
            AnchoringEffect::NoClearEffect => "No Clear Effect",
        }
    }
}

/// Derived metrics for one submitted estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnchorScore {
    /// Absolute estimation error as a percentage of the actual value.
    pub percentage_diff: f64,
    /// Normalized [0, 1] distance ratio: how far the estimate stayed from
    /// the actual value relative to how far the anchor was.
    pub anchor_pull: f64,
}

/// Inclusive anchor draw range for a task: `[⌊lower×actual⌋, ⌊upper×actual⌋]`.
///
/// The range deliberately straddles the true value so the anchor can fall
/// above or below it.
pub fn anchor_bounds(actual_value: f64, lower_factor: f64, upper_factor: f64) -> (i64, i64) {
    let low = (actual_value * lower_factor).floor() as i64;
    let high = (actual_value * upper_factor).floor() as i64;
    (low, high)
}

/// Whether the higher/lower guess was right.
///
/// Uses strict comparison, so an anchor exactly equal to the actual value
/// counts as "the actual value is lower".
pub fn guess_correct(guess: GuessDirection, actual_value: f64, anchor: i64) -> bool {
    let actual_is_higher = actual_value > anchor as f64;
    (guess == GuessDirection::Higher) == actual_is_higher
}

/// Computes percentage error and anchor pull for an estimate.
///
/// `anchor_pull` is 0 when the anchor happens to equal the actual value
/// (there is no anchor distance to normalize by), otherwise it is capped at
/// 1.0: an estimate at or beyond the anchor's distance scores a full pull.
pub fn score_estimate(estimate: f64, actual_value: f64, anchor: i64) -> AnchorScore {
    let percentage_diff = (estimate - actual_value).abs() / actual_value * 100.0;

    let anchor_distance = (anchor as f64 - actual_value).abs();
    let anchor_pull = if anchor_distance == 0.0 {
        0.0
    } else {
        ((estimate - actual_value).abs() / anchor_distance).min(1.0)
    };

    AnchorScore {
        percentage_diff,
        anchor_pull,
    }
}

/// Classifies the anchoring effect visible in an estimate.
pub fn classify_effect(estimate: f64, actual_value: f64, anchor: i64) -> AnchoringEffect {
    let anchor = anchor as f64;
    let distance_to_anchor = (estimate - anchor).abs();
    let distance_to_actual = (estimate - actual_value).abs();

    if distance_to_anchor < distance_to_actual {
        AnchoringEffect::Strong
    } else if (anchor < actual_value && estimate < actual_value)
        || (anchor > actual_value && estimate > actual_value)
    {
        AnchoringEffect::Moderate
    } else {
        AnchoringEffect::NoClearEffect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bounds_floor_both_ends() {
        assert_eq!(anchor_bounds(28.0, 0.3, 2.5), (8, 70));
        assert_eq!(anchor_bounds(1_756_000.0, 0.3, 2.5), (526_800, 4_390_000));
    }

    #[test]
    fn high_anchor_on_budapest_makes_lower_correct() {
        // actual 1,756,000 with anchor 2,000,000: the actual value is lower.
        assert!(!guess_correct(GuessDirection::Higher, 1_756_000.0, 2_000_000));
        assert!(guess_correct(GuessDirection::Lower, 1_756_000.0, 2_000_000));
    }

    #[test]
    fn anchor_equal_to_actual_counts_as_lower() {
        assert!(guess_correct(GuessDirection::Lower, 100.0, 100));
        assert!(!guess_correct(GuessDirection::Higher, 100.0, 100));
    }

    #[test]
    fn score_is_zero_pull_when_anchor_equals_actual() {
        let score = score_estimate(150.0, 100.0, 100);
        assert_eq!(score.anchor_pull, 0.0);
        assert!((score.percentage_diff - 50.0).abs() < 1e-9);
    }

    #[test]
    fn pull_caps_at_one_for_estimates_past_the_anchor() {
        // Anchor 200 vs actual 100; estimating 400 overshoots the anchor.
        let score = score_estimate(400.0, 100.0, 200);
        assert_eq!(score.anchor_pull, 1.0);
    }

    #[test]
    fn pull_is_fractional_between_actual_and_anchor() {
        let score = score_estimate(150.0, 100.0, 200);
        assert!((score.anchor_pull - 0.5).abs() < 1e-9);
    }

    #[test]
    fn estimate_near_anchor_is_strong_effect() {
        assert_eq!(classify_effect(190.0, 100.0, 200), AnchoringEffect::Strong);
    }

    #[test]
    fn estimate_on_anchor_side_is_moderate_effect() {
        // Estimate above actual, anchor above actual, but closer to actual.
        assert_eq!(classify_effect(120.0, 100.0, 200), AnchoringEffect::Moderate);
    }

    #[test]
    fn estimate_opposite_the_anchor_is_no_clear_effect() {
        assert_eq!(classify_effect(80.0, 100.0, 200), AnchoringEffect::NoClearEffect);
    }

    proptest! {
        #[test]
        fn anchor_pull_is_always_within_unit_interval(
            estimate in 0.0_f64..1e9,
            actual in 1.0_f64..1e9,
            anchor in 0_i64..1_000_000_000,
        ) {
            let score = score_estimate(estimate, actual, anchor);
            prop_assert!((0.0..=1.0).contains(&score.anchor_pull));
            prop_assert!(score.percentage_diff >= 0.0);
        }

        #[test]
        fn bounds_straddle_the_actual_value(actual in 4.0_f64..1e9) {
            let (low, high) = anchor_bounds(actual, 0.3, 2.5);
            prop_assert!(low <= high);
            prop_assert!((low as f64) < actual);
            prop_assert!((high as f64) > actual);
        }
    }
}
