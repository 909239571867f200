//! Root session state: the global stage plus the three family sub-states.

use serde::Serialize;

use crate::domain::anchoring::{AnchoringStage, AnchoringState};
use crate::domain::confirmation::{ConfirmationStage, ConfirmationState};
use crate::domain::foundation::SessionId;
use crate::domain::framing::{FramingStage, FramingState};

/// The three experiment families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentFamily {
    Anchoring,
    Confirmation,
    Framing,
}

impl ExperimentFamily {
    pub fn label(&self) -> &'static str {
        match self {
            ExperimentFamily::Anchoring => "Anchoring Bias",
            ExperimentFamily::Confirmation => "Confirmation Bias",
            ExperimentFamily::Framing => "Framing Effect",
        }
    }
}

/// The currently displayed step, across all experiments.
///
/// `Intro` is the top-level menu; each family variant carries that family's
/// own stage machine. Exactly one family machine is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Intro,
    Anchoring(AnchoringStage),
    Confirmation(ConfirmationStage),
    Framing(FramingStage),
}

impl Stage {
    /// The family whose machine is active, if any.
    pub fn family(&self) -> Option<ExperimentFamily> {
        match self {
            Stage::Intro => None,
            Stage::Anchoring(_) => Some(ExperimentFamily::Anchoring),
            Stage::Confirmation(_) => Some(ExperimentFamily::Confirmation),
            Stage::Framing(_) => Some(ExperimentFamily::Framing),
        }
    }

    /// Entry stage for a family, as reached from the top-level menu.
    pub fn entry(family: ExperimentFamily) -> Self {
        match family {
            ExperimentFamily::Anchoring => Stage::Anchoring(AnchoringStage::Intro),
            ExperimentFamily::Confirmation => Stage::Confirmation(ConfirmationStage::Intro),
            ExperimentFamily::Framing => Stage::Framing(FramingStage::Intro),
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Stage::Intro
    }
}

/// One user's transient, in-memory session.
///
/// Created at session start on the intro stage; mutated only through the
/// transition engines; never destroyed, only reset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    id: SessionId,
    stage: Stage,
    pub anchoring: AnchoringState,
    pub confirmation: ConfirmationState,
    pub framing: FramingState,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            stage: Stage::Intro,
            anchoring: AnchoringState::new(),
            confirmation: ConfirmationState::new(),
            framing: FramingState::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub(crate) fn set_stage(&mut self, stage: Stage) {
        self.stage = stage;
    }

    /// Resets every experiment and returns to the top-level intro.
    ///
    /// The session keeps its identity; only its content starts over.
    pub fn reset(&mut self) {
        self.stage = Stage::Intro;
        self.anchoring.reset();
        self.confirmation.reset();
        self.framing.reset();
    }

    /// Drops in-flight actives (task, scenario, anchor, frame) while keeping
    /// accumulated results, counters, and stances.
    ///
    /// Menu navigation uses this so that no active id survives onto a
    /// selection or intro stage.
    pub fn deactivate_all(&mut self) {
        self.anchoring.clear_active_task();
        self.confirmation.evidence.deactivate_scenario();
        self.framing.clear_active_scenario();
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
