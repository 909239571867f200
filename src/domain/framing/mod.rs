//! Framing effect experiment: stages, frame assignment, transition engine,
//! summary.

mod engine;
mod stage;
mod state;
mod summary;

pub use engine::{dispatch, FramingAction, FramingOutcome};
pub use stage::FramingStage;
pub use state::{Frame, FramingResponse, FramingResult, FramingState, RiskChoice};
pub use summary::{summarize, FrameAverage, FramingSummary, RiskChoiceCount};
