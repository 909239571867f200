//! Anchoring experiment stages.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The screens of the anchoring experiment, in flow order.
///
/// The flow is linear with explicit retry/next loops:
/// `Intro → TaskSelection → GenerateAnchor → ShowAnchor → Estimate →
/// TaskResult`, with `TaskResult` looping back to `GenerateAnchor` and every
/// in-task stage offering a way back to `TaskSelection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchoringStage {
    /// Experiment explanation before any task is chosen.
    Intro,
    /// Task list; no task is active here.
    TaskSelection,
    /// A task is active, the anchor has not been drawn yet.
    GenerateAnchor,
    /// The anchor is visible; waiting for the higher/lower guess.
    ShowAnchor,
    /// Guess recorded; waiting for the numeric estimate.
    Estimate,
    /// Per-task result screen.
    TaskResult,
    /// Summary over all completed tasks.
    AllResults,
}

impl AnchoringStage {
    /// Stages that require an active task id in session state.
    pub fn requires_active_task(&self) -> bool {
        matches!(
            self,
            AnchoringStage::GenerateAnchor
                | AnchoringStage::ShowAnchor
                | AnchoringStage::Estimate
                | AnchoringStage::TaskResult
        )
    }

    /// Stages during which a drawn anchor must be present.
    pub fn holds_anchor(&self) -> bool {
        matches!(
            self,
            AnchoringStage::ShowAnchor | AnchoringStage::Estimate | AnchoringStage::TaskResult
        )
    }
}

impl StateMachine for AnchoringStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AnchoringStage::*;
        match self {
            Intro => vec![TaskSelection],
            TaskSelection => vec![GenerateAnchor, AllResults],
            GenerateAnchor => vec![ShowAnchor, TaskSelection],
            ShowAnchor => vec![Estimate, TaskSelection],
            Estimate => vec![TaskResult, TaskSelection],
            TaskResult => vec![GenerateAnchor, TaskSelection],
            AllResults => vec![TaskSelection],
        }
    }
}
