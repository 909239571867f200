//! Wason 2-4-6 sequence classification and testing-strategy scoring.

use serde::Serialize;

use crate::domain::catalog::WASON_RULE_SYNONYMS;

use super::state::WasonState;

/// Classification of one probe sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SequenceClass {
    /// True when the sequence satisfies the hidden rule (strictly ascending).
    pub follows_rule: bool,
    /// True when the probe fits the narrow hypothesis most people form: a
    /// constant-step arithmetic progression of at least three numbers.
    pub is_confirming: bool,
}

/// Classifies a probe against the hidden rule and the confirming pattern.
///
/// Sequences shorter than two numbers never follow the rule; equal or
/// descending neighbours fail it too. The confirming check needs at least
/// three numbers and identical pairwise differences.
pub fn classify_sequence(sequence: &[i64]) -> SequenceClass {
    let follows_rule = sequence.len() >= 2 && sequence.windows(2).all(|w| w[0] < w[1]);

    let is_confirming = sequence.len() >= 3 && {
        let first_step = sequence[1] - sequence[0];
        sequence.windows(2).all(|w| w[1] - w[0] == first_step)
    };

    SequenceClass {
        follows_rule,
        is_confirming,
    }
}

/// Whether a free-text rule guess states the hidden rule.
///
/// Accepts any guess whose lowercased text contains one of the known
/// synonym phrases for "ascending".
pub fn rule_guess_is_correct(guess: &str) -> bool {
    let lowered = guess.to_lowercase();
    WASON_RULE_SYNONYMS.iter().any(|phrase| lowered.contains(phrase))
}

/// How the testing strategy leaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TestingAssessment {
    /// More than 75% confirming probes.
    StrongBias,
    /// More than 50% confirming probes.
    ModerateBias,
    /// Half or more of the probes tried to break the hypothesis.
    Disconfirming,
}

impl TestingAssessment {
    pub fn label(&self) -> &'static str {
        match self {
            TestingAssessment::StrongBias => "Strong confirmation bias",
            TestingAssessment::ModerateBias => "Moderate confirmation bias",
            TestingAssessment::Disconfirming => "Good scientific thinking",
        }
    }
}

/// Summary of the probes a user ran before guessing the rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WasonStrategy {
    pub confirming: u32,
    pub disconfirming: u32,
    pub confirming_percent: f64,
    pub disconfirming_percent: f64,
    pub assessment: TestingAssessment,
}

/// Computes the strategy summary, or `None` when no probes were recorded.
///
/// The zero-test case must not produce a summary at all - there is nothing
/// to divide by and nothing meaningful to chart.
pub fn strategy(state: &WasonState) -> Option<WasonStrategy> {
    let confirming = state.confirming_count();
    let disconfirming = state.disconfirming_count();
    let total = confirming + disconfirming;
    if total == 0 {
        return None;
    }

    let confirming_percent = f64::from(confirming) / f64::from(total) * 100.0;
    let assessment = if confirming_percent > 75.0 {
        TestingAssessment::StrongBias
    } else if confirming_percent > 50.0 {
        TestingAssessment::ModerateBias
    } else {
        TestingAssessment::Disconfirming
    };

    Some(WasonStrategy {
        confirming,
        disconfirming,
        confirming_percent,
        disconfirming_percent: 100.0 - confirming_percent,
        assessment,
    })
}
