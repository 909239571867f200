//! Confirmation experiment stages.
//!
//! Two independent sub-flows hang off the family intro: the Wason 2-4-6
//! rule-discovery loop and the evidence-evaluation scenarios. Their stages
//! share one enum because a session is only ever in one of them at a time.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The screens of the confirmation experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationStage {
    /// Family menu: choose the Wason task or evidence evaluation.
    Intro,
    /// Wason task instructions.
    WasonIntro,
    /// Testing sequences and guessing the rule.
    WasonTask,
    /// The rule was guessed (or revealed); shows the testing strategy.
    WasonSuccess,
    /// A wrong rule guess; offers to continue testing or reveal.
    WasonIncorrect,
    /// Scenario list; no scenario is active here.
    ScenarioSelection,
    /// Stance elicitation and evidence rating for the active scenario.
    ScenarioTask,
    /// Bias score for the active scenario.
    ScenarioResults,
}

impl ConfirmationStage {
    /// Stages that require an active scenario id in session state.
    pub fn requires_active_scenario(&self) -> bool {
        matches!(
            self,
            ConfirmationStage::ScenarioTask | ConfirmationStage::ScenarioResults
        )
    }
}

impl StateMachine for ConfirmationStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ConfirmationStage::*;
        match self {
            Intro => vec![WasonIntro, ScenarioSelection],
            WasonIntro => vec![WasonTask, Intro],
            // Testing a sequence stays on the task screen.
            WasonTask => vec![WasonTask, WasonSuccess, WasonIncorrect],
            WasonSuccess => vec![WasonIntro],
            WasonIncorrect => vec![WasonTask, WasonSuccess],
            ScenarioSelection => vec![ScenarioTask, Intro],
            // Stance submission and per-item rating stay on the task screen.
            ScenarioTask => vec![ScenarioTask, ScenarioResults, ScenarioSelection],
            ScenarioResults => vec![ScenarioSelection, WasonIntro],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wason_flow_edges_exist() {
        use ConfirmationStage::*;
        assert!(Intro.can_transition_to(&WasonIntro));
        assert!(WasonIntro.can_transition_to(&WasonTask));
        assert!(WasonTask.can_transition_to(&WasonTask));
        assert!(WasonTask.can_transition_to(&WasonSuccess));
        assert!(WasonTask.can_transition_to(&WasonIncorrect));
        assert!(WasonIncorrect.can_transition_to(&WasonTask));
        assert!(WasonSuccess.can_transition_to(&WasonIntro));
    }

    #[test]
    fn evidence_flow_edges_exist() {
        use ConfirmationStage::*;
        assert!(Intro.can_transition_to(&ScenarioSelection));
        assert!(ScenarioSelection.can_transition_to(&ScenarioTask));
        assert!(ScenarioTask.can_transition_to(&ScenarioResults));
        assert!(ScenarioResults.can_transition_to(&ScenarioSelection));
        assert!(ScenarioResults.can_transition_to(&WasonIntro));
    }

    #[test]
    fn scenario_stages_require_active_scenario() {
        use ConfirmationStage::*;
        assert!(ScenarioTask.requires_active_scenario());
        assert!(ScenarioResults.requires_active_scenario());
        assert!(!ScenarioSelection.requires_active_scenario());
        assert!(!WasonTask.requires_active_scenario());
    }

    #[test]
    fn no_stage_is_terminal() {
        use ConfirmationStage::*;
        for stage in [
            Intro,
            WasonIntro,
            WasonTask,
            WasonSuccess,
            WasonIncorrect,
            ScenarioSelection,
            ScenarioTask,
            ScenarioResults,
        ] {
            assert!(!stage.is_terminal());
        }
    }
}
