//! Anchoring bias experiment: stages, transition engine, scoring, summary.

mod engine;
mod scoring;
mod stage;
mod state;
mod summary;

pub use engine::{dispatch, AnchoringAction, AnchoringOutcome, MAX_ESTIMATE_FACTOR};
pub use scoring::{
    anchor_bounds, classify_effect, guess_correct, score_estimate, AnchorScore, AnchoringEffect,
    GuessDirection,
};
pub use stage::AnchoringStage;
pub use state::{AnchoringResult, AnchoringState};
pub use summary::{summarize, AnchoringSummary, Susceptibility};
