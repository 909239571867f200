//! Confirmation bias experiment: the Wason 2-4-6 task and evidence
//! evaluation scenarios.

mod engine;
mod evidence;
mod stage;
mod state;
mod wason;

pub use engine::{dispatch, ConfirmationAction, ConfirmationEvent, ConfirmationOutcome};
pub use evidence::{bias_label, presentation_order, score_scenario, BiasLabel, EvidenceReport};
pub use stage::ConfirmationStage;
pub use state::{ConfirmationState, EvidenceState, StanceRecord, WasonState, WasonTest};
pub use wason::{
    classify_sequence, rule_guess_is_correct, strategy, SequenceClass, TestingAssessment,
    WasonStrategy,
};
