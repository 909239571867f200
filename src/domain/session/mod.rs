//! Session module - the root state record and global stage.

mod state;

pub use state::{ExperimentFamily, SessionState, Stage};
