//! Framing experiment stages.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The screens of the framing experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FramingStage {
    /// Experiment explanation.
    Intro,
    /// Pick one of the three framing sub-experiments.
    TypeSelection,
    /// Scenario list for the chosen sub-experiment.
    ScenarioSelection,
    /// The framed prompt; waiting for a choice or rating.
    Experiment,
    /// Per-scenario result screen.
    FrameResult,
    /// Summary over all completed framing scenarios.
    AllResults,
}

impl FramingStage {
    /// Stages that require an active scenario (and assigned frame).
    pub fn requires_active_scenario(&self) -> bool {
        matches!(self, FramingStage::Experiment | FramingStage::FrameResult)
    }

    /// Stages that require a chosen sub-experiment.
    pub fn requires_family(&self) -> bool {
        matches!(
            self,
            FramingStage::ScenarioSelection | FramingStage::Experiment | FramingStage::FrameResult
        )
    }
}

impl StateMachine for FramingStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use FramingStage::*;
        match self {
            Intro => vec![TypeSelection],
            TypeSelection => vec![ScenarioSelection, AllResults],
            ScenarioSelection => vec![Experiment, TypeSelection, AllResults],
            Experiment => vec![FrameResult, ScenarioSelection],
            FrameResult => vec![ScenarioSelection, TypeSelection, AllResults],
            AllResults => vec![TypeSelection],
        }
    }
}
