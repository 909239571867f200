//! Confirmation bias content: evidence scenarios and the Wason rule task.
//!
//! Each scenario partitions its stance options into groups relative to the
//! scenario's hypothesis, and classifies every evidence item per group with
//! an explicit table. Resolving an item's kind is a table lookup on the
//! user's stance group - no string matching on option labels.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::foundation::{EvidenceId, ScenarioId};

/// Where a stance option sits relative to the scenario's hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StanceGroup {
    /// The option aligns with the hypothesis (e.g. coffee drinkers for
    /// "coffee is beneficial").
    Aligned,
    /// The option opposes the hypothesis.
    Opposed,
    /// The option implies no prior leaning.
    Neutral,
}

/// How an evidence item relates to the hypothesis for a given stance group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    Supporting,
    Contradicting,
    Neutral,
}

/// One selectable answer to the stance question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StanceOption {
    pub label: &'static str,
    pub group: StanceGroup,
}

/// One piece of evidence with its per-group classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvidenceItem {
    pub id: EvidenceId,
    pub text: &'static str,
    pub explanation: &'static str,
    kind_when_aligned: EvidenceKind,
    kind_when_opposed: EvidenceKind,
    kind_when_neutral: EvidenceKind,
}

impl EvidenceItem {
    const fn new(
        id: &'static str,
        text: &'static str,
        explanation: &'static str,
        kind_when_aligned: EvidenceKind,
        kind_when_opposed: EvidenceKind,
        kind_when_neutral: EvidenceKind,
    ) -> Self {
        Self {
            id: EvidenceId::new(id),
            text,
            explanation,
            kind_when_aligned,
            kind_when_opposed,
            kind_when_neutral,
        }
    }

    /// Resolves the item's kind for the given stance group.
    pub fn kind_for(&self, group: StanceGroup) -> EvidenceKind {
        match group {
            StanceGroup::Aligned => self.kind_when_aligned,
            StanceGroup::Opposed => self.kind_when_opposed,
            StanceGroup::Neutral => self.kind_when_neutral,
        }
    }
}

/// An evidence-evaluation scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationScenario {
    pub id: ScenarioId,
    pub title: &'static str,
    pub description: &'static str,
    pub stance_question: &'static str,
    pub stance_options: &'static [StanceOption],
    pub hypothesis: &'static str,
    pub evidence: &'static [EvidenceItem],
}

impl ConfirmationScenario {
    /// Returns the stance option at `index`, if any.
    pub fn stance_option(&self, index: usize) -> Option<&'static StanceOption> {
        self.stance_options.get(index)
    }

    /// Looks up an evidence item by id.
    pub fn evidence_item(&self, id: EvidenceId) -> Option<&'static EvidenceItem> {
        self.evidence.iter().find(|e| e.id == id)
    }
}

use EvidenceKind::{Contradicting, Neutral as NeutralKind, Supporting};

/// All evidence scenarios, in selection-screen order.
pub static CONFIRMATION_SCENARIOS: &[ConfirmationScenario] = &[
    ConfirmationScenario {
        id: ScenarioId::new("health_study"),
        title: "Health Study Evaluation",
        description: "A new study has been published suggesting that coffee may help prevent \
                      certain diseases.",
        stance_question: "Are you a coffee drinker?",
        stance_options: &[
            StanceOption { label: "I drink a lot of coffee", group: StanceGroup::Aligned },
            StanceOption { label: "I drink coffee occasionally", group: StanceGroup::Aligned },
            StanceOption { label: "I rarely drink coffee", group: StanceGroup::Opposed },
            StanceOption { label: "I never drink coffee", group: StanceGroup::Opposed },
        ],
        hypothesis: "Coffee is beneficial for health",
        evidence: &[
            EvidenceItem::new(
                "e1",
                "The study was funded by a major coffee industry association, creating a \
                 potential conflict of interest.",
                "Financial conflicts of interest can bias research design and interpretation \
                 of results.",
                Contradicting,
                Supporting,
                NeutralKind,
            ),
            EvidenceItem::new(
                "e2",
                "The study found that regular coffee drinkers had a 23% lower risk of heart \
                 disease compared to non-drinkers.",
                "This is a clear, substantial health benefit that supports the hypothesis.",
                Supporting,
                Contradicting,
                NeutralKind,
            ),
            EvidenceItem::new(
                "e3",
                "Three previous large-scale studies found no significant health benefits from \
                 coffee consumption.",
                "This directly contradicts the current findings, suggesting they might not be \
                 reliable.",
                Contradicting,
                Supporting,
                NeutralKind,
            ),
            EvidenceItem::new(
                "e4",
                "The researchers only found a correlation and stated clearly that they cannot \
                 prove coffee directly causes health benefits.",
                "Without establishing causation, we cannot be sure coffee is responsible for \
                 any observed benefits.",
                Contradicting,
                Supporting,
                NeutralKind,
            ),
            EvidenceItem::new(
                "e5",
                "Brain scans showed increased blood flow in cognitive regions after coffee \
                 consumption in a controlled sub-study.",
                "This provides a potential biological mechanism for how coffee might improve \
                 health.",
                Supporting,
                Contradicting,
                NeutralKind,
            ),
            EvidenceItem::new(
                "e6",
                "Participants who consumed more than 5 cups daily showed increased anxiety and \
                 sleep disturbances compared to moderate drinkers.",
                "This suggests potential negative health effects at higher consumption levels.",
                Contradicting,
                Supporting,
                NeutralKind,
            ),
            EvidenceItem::new(
                "e7",
                "When researchers controlled for age, smoking, exercise and diet, the positive \
                 association between coffee and health remained strong.",
                "This methodological strength increases confidence that coffee itself is \
                 related to the health outcome.",
                Supporting,
                Contradicting,
                NeutralKind,
            ),
            EvidenceItem::new(
                "e8",
                "The beneficial compounds in coffee identified in the study have been \
                 independently verified to have antioxidant properties in laboratory tests.",
                "This provides additional scientific support for why coffee might have health \
                 benefits.",
                Supporting,
                Contradicting,
                NeutralKind,
            ),
        ],
    },
    ConfirmationScenario {
        id: ScenarioId::new("political_policy"),
        title: "Political Policy Evaluation",
        description: "A progressive politician from the left has proposed a new economic policy \
                      focused on increasing corporate taxation to fund expanded social programs.",
        stance_question: "What is your political leaning?",
        stance_options: &[
            StanceOption { label: "Strongly liberal/left", group: StanceGroup::Aligned },
            StanceOption { label: "Moderately liberal/left", group: StanceGroup::Aligned },
            StanceOption { label: "Moderately conservative/right", group: StanceGroup::Opposed },
            StanceOption { label: "Strongly conservative/right", group: StanceGroup::Opposed },
        ],
        hypothesis: "The proposed economic policy will benefit the country",
        evidence: &[
            EvidenceItem::new(
                "e1",
                "The policy was implemented in three Nordic countries and resulted in \
                 measurable economic growth in all cases.",
                "Real-world success in comparable situations suggests potential effectiveness, \
                 though contexts may differ.",
                Supporting,
                Contradicting,
                NeutralKind,
            ),
            EvidenceItem::new(
                "e2",
                "A coalition of business leaders predict the policy would lead to job losses \
                 due to capital flight.",
                "Business perspective suggests economic risks, though may represent \
                 self-interest.",
                Contradicting,
                Supporting,
                NeutralKind,
            ),
            EvidenceItem::new(
                "e3",
                "Independent analysis shows the policy would cost 3 times more than initially \
                 proposed by its supporters.",
                "Significantly higher costs affect feasibility and value proposition of the \
                 policy.",
                Contradicting,
                Supporting,
                NeutralKind,
            ),
            EvidenceItem::new(
                "e4",
                "In regions where elements of this policy were tested, unemployment decreased \
                 by 12% within the first year.",
                "Early testing provides concrete evidence of positive economic impact.",
                Supporting,
                Contradicting,
                NeutralKind,
            ),
            EvidenceItem::new(
                "e5",
                "Computer modeling by the Federal Reserve predicts the policy would initially \
                 slow economic growth for 3-5 years before any benefits appear.",
                "Significant negative short-term impact could outweigh potential long-term \
                 benefits.",
                Contradicting,
                Supporting,
                NeutralKind,
            ),
            EvidenceItem::new(
                "e6",
                "A detailed implementation plan shows how the policy could be funded without \
                 increasing the national deficit.",
                "Financial sustainability strengthens the case for the policy's overall value.",
                Supporting,
                Contradicting,
                NeutralKind,
            ),
        ],
    },
    ConfirmationScenario {
        id: ScenarioId::new("product_review"),
        title: "Product Purchase Decision",
        description: "You're considering buying a smartphone from Apple.",
        stance_question: "What has been your experience with Apple products?",
        stance_options: &[
            StanceOption { label: "Very positive experiences", group: StanceGroup::Aligned },
            StanceOption { label: "Somewhat positive experiences", group: StanceGroup::Aligned },
            StanceOption { label: "Mixed experiences", group: StanceGroup::Neutral },
            StanceOption { label: "Somewhat negative experiences", group: StanceGroup::Opposed },
            StanceOption { label: "Very negative experiences", group: StanceGroup::Opposed },
            StanceOption { label: "No prior experience", group: StanceGroup::Neutral },
        ],
        hypothesis: "The new Apple smartphone is a good purchase",
        evidence: &[
            EvidenceItem::new(
                "e1",
                "The phone has received mixed reviews from tech experts.",
                "Expert opinions are divided, suggesting some potential concerns.",
                Contradicting,
                Supporting,
                NeutralKind,
            ),
            EvidenceItem::new(
                "e2",
                "The battery life is shorter than competing models.",
                "Inferior battery performance could affect daily usability.",
                Contradicting,
                Supporting,
                Contradicting,
            ),
            EvidenceItem::new(
                "e3",
                "Apple is offering a significant discount on this model.",
                "Good price may improve value proposition, though could indicate clearing \
                 stock.",
                Supporting,
                Contradicting,
                Supporting,
            ),
            EvidenceItem::new(
                "e4",
                "Your friend who bought this phone is very satisfied with it.",
                "Personal recommendation from someone you trust, though represents only one \
                 experience.",
                Supporting,
                Contradicting,
                Supporting,
            ),
            EvidenceItem::new(
                "e5",
                "Customer reviews mention the phone occasionally freezes.",
                "Reported technical issues could affect user experience.",
                Contradicting,
                Supporting,
                Contradicting,
            ),
            EvidenceItem::new(
                "e6",
                "The phone's camera received awards for quality.",
                "Recognized excellence in a key feature for many users.",
                Supporting,
                Contradicting,
                Supporting,
            ),
        ],
    },
];

static SCENARIOS_BY_ID: Lazy<HashMap<ScenarioId, &'static ConfirmationScenario>> =
    Lazy::new(|| CONFIRMATION_SCENARIOS.iter().map(|s| (s.id, s)).collect());

/// Looks up a scenario by id.
pub fn confirmation_scenario(id: ScenarioId) -> Option<&'static ConfirmationScenario> {
    SCENARIOS_BY_ID.get(&id).copied()
}

/// Iterates scenarios in catalog order.
pub fn confirmation_scenarios() -> impl Iterator<Item = &'static ConfirmationScenario> {
    CONFIRMATION_SCENARIOS.iter()
}

// ─────────────────────────────────────────────────────────────────────────
// Wason 2-4-6 rule task
// ─────────────────────────────────────────────────────────────────────────

/// The seed sequence shown to the user; it follows the hidden rule.
pub const WASON_SEED_SEQUENCE: [i64; 3] = [2, 4, 6];

/// Phrases accepted as a correct statement of the hidden rule.
///
/// A guess is correct when its lowercased text contains any of these.
pub const WASON_RULE_SYNONYMS: &[&str] =
    &["ascending", "increasing", "goes up", "greater than", ">", "higher"];
