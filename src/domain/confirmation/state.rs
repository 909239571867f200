//! Confirmation session state: Wason counters and evidence-evaluation state.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::catalog::StanceGroup;
use crate::domain::foundation::{EvidenceId, Rating, ScenarioId, Timestamp};

use super::evidence::EvidenceReport;

/// One probe sequence tested against the hidden rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WasonTest {
    pub sequence: Vec<i64>,
    pub follows_rule: bool,
    pub is_confirming: bool,
    pub tested_at: Timestamp,
}

impl WasonTest {
    /// Classifies a probe and stamps it.
    pub fn classify(sequence: Vec<i64>) -> Self {
        let class = super::wason::classify_sequence(&sequence);
        Self {
            sequence,
            follows_rule: class.follows_rule,
            is_confirming: class.is_confirming,
            tested_at: Timestamp::now(),
        }
    }
}

/// Accumulated Wason sub-session state.
///
/// The test log and both counters accumulate across the whole sub-session -
/// they survive wrong guesses and only clear on an explicit reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WasonState {
    tests: Vec<WasonTest>,
    rule_guesses: Vec<String>,
    confirming_count: u32,
    disconfirming_count: u32,
}

impl WasonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tests(&self) -> &[WasonTest] {
        &self.tests
    }

    pub fn rule_guesses(&self) -> &[String] {
        &self.rule_guesses
    }

    pub fn confirming_count(&self) -> u32 {
        self.confirming_count
    }

    pub fn disconfirming_count(&self) -> u32 {
        self.disconfirming_count
    }

    /// Appends a classified probe and bumps the matching counter.
    pub fn record_test(&mut self, test: WasonTest) {
        if test.is_confirming {
            self.confirming_count += 1;
        } else {
            self.disconfirming_count += 1;
        }
        self.tests.push(test);
    }

    pub fn record_guess(&mut self, guess: String) {
        self.rule_guesses.push(guess);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The user's self-reported prior disposition for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StanceRecord {
    pub option_label: &'static str,
    pub group: StanceGroup,
    /// How strongly the position is held, 1-10.
    pub strength: Rating,
}

/// Evidence-evaluation sub-session state.
///
/// # Invariants
///
/// - `ratings` always belongs to `current_scenario`; both clear together.
/// - `stances` gains at most one entry per scenario id, written once.
/// - `reports` holds at most one entry per scenario id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvidenceState {
    current_scenario: Option<ScenarioId>,
    stances: BTreeMap<ScenarioId, StanceRecord>,
    ratings: BTreeMap<EvidenceId, Rating>,
    reports: Vec<EvidenceReport>,
}

impl EvidenceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_scenario(&self) -> Option<ScenarioId> {
        self.current_scenario
    }

    pub fn stance_for(&self, id: ScenarioId) -> Option<&StanceRecord> {
        self.stances.get(&id)
    }

    pub fn has_stance(&self, id: ScenarioId) -> bool {
        self.stances.contains_key(&id)
    }

    pub fn ratings(&self) -> &BTreeMap<EvidenceId, Rating> {
        &self.ratings
    }

    pub fn reports(&self) -> &[EvidenceReport] {
        &self.reports
    }

    pub fn report_for(&self, id: ScenarioId) -> Option<&EvidenceReport> {
        self.reports.iter().find(|r| r.scenario_id == id)
    }

    /// Activates a scenario, dropping ratings left over from a previous one.
    pub fn activate_scenario(&mut self, id: ScenarioId) {
        self.current_scenario = Some(id);
        self.ratings.clear();
    }

    /// Records the stance for a scenario; at most once per scenario.
    ///
    /// Returns false (and leaves state untouched) if a stance already exists.
    pub fn record_stance(&mut self, id: ScenarioId, stance: StanceRecord) -> bool {
        if self.stances.contains_key(&id) {
            return false;
        }
        self.stances.insert(id, stance);
        true
    }

    pub fn rate(&mut self, evidence: EvidenceId, rating: Rating) {
        self.ratings.insert(evidence, rating);
    }

    /// Stores a report, replacing any prior report for the same scenario.
    pub fn record_report(&mut self, report: EvidenceReport) {
        self.reports.retain(|r| r.scenario_id != report.scenario_id);
        self.reports.push(report);
    }

    /// Drops the active scenario, its in-flight ratings, and its stance.
    ///
    /// This is the explicit reset that allows a scenario to be rerun with a
    /// fresh stance; stored reports survive until overwritten.
    pub fn clear_active_scenario(&mut self) {
        if let Some(id) = self.current_scenario.take() {
            self.stances.remove(&id);
        }
        self.ratings.clear();
    }

    /// Deactivates the scenario while keeping its stance (menu navigation,
    /// not an explicit reset). Revisiting the scenario skips the stance
    /// question and goes straight to rating.
    pub fn deactivate_scenario(&mut self) {
        self.current_scenario = None;
        self.ratings.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Combined confirmation-family session state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfirmationState {
    pub wason: WasonState,
    pub evidence: EvidenceState,
}

impl ConfirmationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.wason.reset();
        self.evidence.reset();
    }
}
