//! Framing session state, frame assignment, and results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::catalog::FramingFamily;
use crate::domain::foundation::{Rating, ScenarioId, Timestamp};

/// A frame variant a scenario can be presented under.
///
/// Risk and attribute scenarios draw from {Positive, Negative}; goal
/// scenarios draw from {Gain, Loss, Neutral}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frame {
    Positive,
    Negative,
    Gain,
    Loss,
    Neutral,
}

impl Frame {
    /// The frames a family's scenarios are randomly assigned from.
    pub fn candidates(family: FramingFamily) -> &'static [Frame] {
        match family {
            FramingFamily::Risk | FramingFamily::Attribute => &[Frame::Positive, Frame::Negative],
            FramingFamily::Goal => &[Frame::Gain, Frame::Loss, Frame::Neutral],
        }
    }

    /// Whether this frame is drawable for the given family.
    pub fn belongs_to(&self, family: FramingFamily) -> bool {
        Self::candidates(family).contains(self)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frame::Positive => "positive",
            Frame::Negative => "negative",
            Frame::Gain => "gain",
            Frame::Loss => "loss",
            Frame::Neutral => "neutral",
        }
    }
}

/// The two options of a risk-framing choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskChoice {
    /// The sure option.
    A,
    /// The gamble.
    B,
}

/// What the user answered under the assigned frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FramingResponse {
    /// Risk scenarios: which program/treatment/plan was chosen.
    Choice(RiskChoice),
    /// Attribute and goal scenarios: the 1-10 evaluation.
    Rating(Rating),
}

/// Completed record for one framing scenario.
///
/// The frame is fixed at scenario selection and copied here so it cannot
/// silently change between screens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FramingResult {
    pub scenario_id: ScenarioId,
    pub scenario_title: &'static str,
    pub family: FramingFamily,
    pub frame: Frame,
    pub response: FramingResponse,
    pub recorded_at: Timestamp,
}

/// Mutable per-session state of the framing experiment.
///
/// # Invariants
///
/// - `frame` is `Some` exactly while `current_scenario` is.
/// - `results` holds at most one entry per scenario id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FramingState {
    family: Option<FramingFamily>,
    current_scenario: Option<ScenarioId>,
    frame: Option<Frame>,
    completed: BTreeSet<ScenarioId>,
    results: Vec<FramingResult>,
}

impl FramingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn family(&self) -> Option<FramingFamily> {
        self.family
    }

    pub fn current_scenario(&self) -> Option<ScenarioId> {
        self.current_scenario
    }

    pub fn frame(&self) -> Option<Frame> {
        self.frame
    }

    pub fn completed(&self) -> &BTreeSet<ScenarioId> {
        &self.completed
    }

    pub fn results(&self) -> &[FramingResult] {
        &self.results
    }

    pub fn result_for(&self, id: ScenarioId) -> Option<&FramingResult> {
        self.results.iter().find(|r| r.scenario_id == id)
    }

    pub fn choose_family(&mut self, family: FramingFamily) {
        self.family = Some(family);
        self.clear_active_scenario();
    }

    pub fn clear_family(&mut self) {
        self.family = None;
        self.clear_active_scenario();
    }

    /// Activates a scenario under its randomly assigned frame.
    pub fn activate_scenario(&mut self, id: ScenarioId, frame: Frame) {
        self.current_scenario = Some(id);
        self.frame = Some(frame);
    }

    pub fn clear_active_scenario(&mut self) {
        self.current_scenario = None;
        self.frame = None;
    }

    /// Stores a result, replacing any prior result for the same scenario,
    /// and marks the scenario completed.
    pub fn record_result(&mut self, result: FramingResult) {
        self.results.retain(|r| r.scenario_id != result.scenario_id);
        self.completed.insert(result.scenario_id);
        self.results.push(result);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_frames_are_binary_and_goal_frames_ternary() {
        assert_eq!(Frame::candidates(FramingFamily::Risk).len(), 2);
        assert_eq!(Frame::candidates(FramingFamily::Attribute).len(), 2);
        assert_eq!(Frame::candidates(FramingFamily::Goal).len(), 3);
    }

    #[test]
    fn frame_family_membership() {
        assert!(Frame::Positive.belongs_to(FramingFamily::Risk));
        assert!(!Frame::Gain.belongs_to(FramingFamily::Attribute));
        assert!(Frame::Neutral.belongs_to(FramingFamily::Goal));
        assert!(!Frame::Negative.belongs_to(FramingFamily::Goal));
    }

    #[test]
    fn activating_a_scenario_pins_its_frame() {
        let mut state = FramingState::new();
        state.choose_family(FramingFamily::Goal);
        state.activate_scenario(ScenarioId::new("retirement_saving"), Frame::Loss);

        assert_eq!(state.frame(), Some(Frame::Loss));
        assert_eq!(state.current_scenario(), Some(ScenarioId::new("retirement_saving")));
    }

    #[test]
    fn record_result_replaces_per_scenario() {
        let id = ScenarioId::new("ground_beef");
        let mut state = FramingState::new();
        let result = |rating: u8| FramingResult {
            scenario_id: id,
            scenario_title: "Ground Beef Evaluation",
            family: FramingFamily::Attribute,
            frame: Frame::Positive,
            response: FramingResponse::Rating(Rating::try_new(rating).unwrap()),
            recorded_at: Timestamp::now(),
        };

        state.record_result(result(4));
        state.record_result(result(9));

        assert_eq!(state.results().len(), 1);
        assert!(matches!(
            state.result_for(id).unwrap().response,
            FramingResponse::Rating(r) if r.value() == 9
        ));
        assert!(state.completed().contains(&id));
    }

    #[test]
    fn choosing_a_family_clears_the_active_scenario() {
        let mut state = FramingState::new();
        state.choose_family(FramingFamily::Risk);
        state.activate_scenario(ScenarioId::new("disease_problem"), Frame::Negative);

        state.choose_family(FramingFamily::Attribute);

        assert!(state.current_scenario().is_none());
        assert!(state.frame().is_none());
    }
}
