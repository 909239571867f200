//! Aggregation of anchoring results for the all-results view.

use serde::Serialize;

use super::scoring::AnchoringEffect;
use super::state::AnchoringResult;

/// Overall susceptibility reading across completed tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Susceptibility {
    /// Strong plus moderate effects in more than 75% of tasks.
    Strong,
    /// Strong plus moderate effects in more than 50% of tasks.
    Moderate,
    /// The anchor was resisted in most tasks.
    Minimal,
}

impl Susceptibility {
    pub fn label(&self) -> &'static str {
        match self {
            Susceptibility::Strong => "Strong anchoring effect",
            Susceptibility::Moderate => "Moderate anchoring effect",
            Susceptibility::Minimal => "Minimal anchoring effect",
        }
    }
}

/// Summary statistics over all completed anchoring tasks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnchoringSummary {
    pub total: usize,
    pub average_error_percent: f64,
    pub strong_count: usize,
    pub moderate_count: usize,
    pub no_effect_count: usize,
    pub strong_percent: f64,
    pub moderate_percent: f64,
    pub no_effect_percent: f64,
    pub correct_guesses: usize,
    pub guess_accuracy_percent: f64,
    pub susceptibility: Susceptibility,
}

/// Folds completed results into the summary, or `None` when empty.
pub fn summarize(results: &[AnchoringResult]) -> Option<AnchoringSummary> {
    if results.is_empty() {
        return None;
    }
    let total = results.len();

    let average_error_percent =
        results.iter().map(|r| r.percentage_diff).sum::<f64>() / total as f64;

    let strong_count = results.iter().filter(|r| r.effect == AnchoringEffect::Strong).count();
    let moderate_count = results.iter().filter(|r| r.effect == AnchoringEffect::Moderate).count();
    let no_effect_count = total - strong_count - moderate_count;

    let percent = |count: usize| count as f64 / total as f64 * 100.0;
    let strong_percent = percent(strong_count);
    let moderate_percent = percent(moderate_count);

    let correct_guesses = results.iter().filter(|r| r.guess_correct).count();

    let susceptibility = if strong_percent + moderate_percent > 75.0 {
        Susceptibility::Strong
    } else if strong_percent + moderate_percent > 50.0 {
        Susceptibility::Moderate
    } else {
        Susceptibility::Minimal
    };

    Some(AnchoringSummary {
        total,
        average_error_percent,
        strong_count,
        moderate_count,
        no_effect_count,
        strong_percent,
        moderate_percent,
        no_effect_percent: percent(no_effect_count),
        correct_guesses,
        guess_accuracy_percent: percent(correct_guesses),
        susceptibility,
    })
}
