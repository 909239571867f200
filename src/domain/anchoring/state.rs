//! Anchoring session state and results.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::foundation::{TaskId, Timestamp};

use super::scoring::{AnchoringEffect, GuessDirection};

/// Completed record for one anchoring task.
///
/// Captures the inputs that produced it alongside the engine-computed
/// metrics. Immutable after creation; re-submitting the same task replaces
/// the whole record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnchoringResult {
    pub task_id: TaskId,
    pub task_name: &'static str,
    pub unit: &'static str,
    pub anchor: i64,
    pub actual_value: f64,
    pub estimate: f64,
    pub percentage_diff: f64,
    pub anchor_pull: f64,
    pub effect: AnchoringEffect,
    pub guess: GuessDirection,
    pub guess_correct: bool,
    pub recorded_at: Timestamp,
}

/// Mutable per-session state of the anchoring experiment.
///
/// # Invariants
///
/// - `anchor`, `guess`, and `guess_correct` are only populated while a task
///   is active, and are cleared together.
/// - `results` holds at most one entry per task id.
/// - Every result's task id is in `completed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnchoringState {
    current_task: Option<TaskId>,
    anchor: Option<i64>,
    guess: Option<GuessDirection>,
    guess_correct: Option<bool>,
    completed: BTreeSet<TaskId>,
    results: Vec<AnchoringResult>,
}

impl AnchoringState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_task(&self) -> Option<TaskId> {
        self.current_task
    }

    pub fn anchor(&self) -> Option<i64> {
        self.anchor
    }

    pub fn guess(&self) -> Option<GuessDirection> {
        self.guess
    }

    pub fn guess_correct(&self) -> Option<bool> {
        self.guess_correct
    }

    pub fn completed(&self) -> &BTreeSet<TaskId> {
        &self.completed
    }

    pub fn is_completed(&self, id: TaskId) -> bool {
        self.completed.contains(&id)
    }

    pub fn results(&self) -> &[AnchoringResult] {
        &self.results
    }

    /// Returns the stored result for a task, if the task was completed.
    pub fn result_for(&self, id: TaskId) -> Option<&AnchoringResult> {
        self.results.iter().find(|r| r.task_id == id)
    }

    /// Activates a task, discarding any in-flight anchor/guess progress.
    pub fn activate_task(&mut self, id: TaskId) {
        self.current_task = Some(id);
        self.clear_progress();
    }

    /// Drops the active task together with its progress.
    pub fn clear_active_task(&mut self) {
        self.current_task = None;
        self.clear_progress();
    }

    /// Clears the drawn anchor and guess, keeping the task active (retry).
    pub fn clear_progress(&mut self) {
        self.anchor = None;
        self.guess = None;
        self.guess_correct = None;
    }

    pub fn set_anchor(&mut self, anchor: i64) {
        self.anchor = Some(anchor);
    }

    pub fn set_guess(&mut self, guess: GuessDirection, correct: bool) {
        self.guess = Some(guess);
        self.guess_correct = Some(correct);
    }

    /// Stores a result, replacing any prior result for the same task, and
    /// marks the task completed.
    pub fn record_result(&mut self, result: AnchoringResult) {
        self.results.retain(|r| r.task_id != result.task_id);
        self.completed.insert(result.task_id);
        self.results.push(result);
    }

    /// Resets the whole experiment back to its initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
