//! Evidence-stance bias scoring and presentation ordering.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::catalog::{ConfirmationScenario, EvidenceKind};
use crate::domain::foundation::{mean_rating, EvidenceId, Rating, ScenarioId, Timestamp};

use super::state::StanceRecord;

/// Label buckets for the bias score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasLabel {
    /// Score above 3: supporting evidence rated far above contradicting.
    Strong,
    /// Score above 1.
    Moderate,
    /// Score between -1 and 1: both sides rated roughly equally.
    Minimal,
    /// Score of -1 or below: contradicting evidence rated higher.
    Reverse,
}

impl BiasLabel {
    pub fn label(&self) -> &'static str {
        match self {
            BiasLabel::Strong => "Strong confirmation bias",
            BiasLabel::Moderate => "Moderate confirmation bias",
            BiasLabel::Minimal => "Minimal confirmation bias",
            BiasLabel::Reverse => "Reverse bias",
        }
    }
}

/// Maps a bias score to its display label.
pub fn bias_label(score: f64) -> BiasLabel {
    if score > 3.0 {
        BiasLabel::Strong
    } else if score > 1.0 {
        BiasLabel::Moderate
    } else if score > -1.0 {
        BiasLabel::Minimal
    } else {
        BiasLabel::Reverse
    }
}

/// Scored outcome of one evidence-evaluation scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvidenceReport {
    pub scenario_id: ScenarioId,
    pub scenario_title: &'static str,
    pub stance: StanceRecord,
    /// Ratings bucketed by the kind each item resolves to for this stance.
    pub supporting: Vec<Rating>,
    pub contradicting: Vec<Rating>,
    pub neutral: Vec<Rating>,
    pub average_supporting: f64,
    pub average_contradicting: f64,
    /// `mean(supporting) - mean(contradicting)`; empty groups count as 0.
    pub bias_score: f64,
    pub label: BiasLabel,
    pub recorded_at: Timestamp,
}

/// Scores the rated evidence of a scenario against the user's stance.
///
/// Each rated item's kind comes from the scenario's stance-group table;
/// unrated items are simply absent. Ratings are bucketed in catalog order so
/// the report is independent of presentation order.
pub fn score_scenario(
    scenario: &ConfirmationScenario,
    stance: StanceRecord,
    ratings: &BTreeMap<EvidenceId, Rating>,
) -> EvidenceReport {
    let mut supporting = Vec::new();
    let mut contradicting = Vec::new();
    let mut neutral = Vec::new();

    for item in scenario.evidence {
        let Some(&rating) = ratings.get(&item.id) else {
            continue;
        };
        match item.kind_for(stance.group) {
            EvidenceKind::Supporting => supporting.push(rating),
            EvidenceKind::Contradicting => contradicting.push(rating),
            EvidenceKind::Neutral => neutral.push(rating),
        }
    }

    let average_supporting = mean_rating(&supporting);
    let average_contradicting = mean_rating(&contradicting);
    let bias_score = average_supporting - average_contradicting;

    EvidenceReport {
        scenario_id: scenario.id,
        scenario_title: scenario.title,
        stance,
        supporting,
        contradicting,
        neutral,
        average_supporting,
        average_contradicting,
        bias_score,
        label: bias_label(bias_score),
        recorded_at: Timestamp::now(),
    }
}

/// Deterministic presentation order for a scenario's evidence.
///
/// Shuffled with a fixed seed so the order differs from the catalog order
/// (avoiding order effects) yet is reproducible across runs. Scoring never
/// looks at this order.
pub fn presentation_order(scenario: &ConfirmationScenario, seed: u64) -> Vec<EvidenceId> {
    let mut ids: Vec<EvidenceId> = scenario.evidence.iter().map(|e| e.id).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    ids.shuffle(&mut rng);
    ids
}
