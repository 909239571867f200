//! Application layer - the dispatch surface the presentation layer talks to.

mod controller;

pub use controller::{Action, DispatchOutcome, ExperimentResult, Simulator};
