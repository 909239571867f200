//! Anchoring transition engine.
//!
//! Pure stage/action dispatch: given the current stage, a user action, and
//! the session's anchoring state, computes the next stage and any mutation.
//! Every reachable `(stage, action)` pair is matched exhaustively; anything
//! else is an invalid transition. A failed dispatch leaves state untouched.

use tracing::debug;

use crate::config::SimulatorConfig;
use crate::domain::catalog::{anchoring_task, anchoring_tasks, AnchoringTask};
use crate::domain::foundation::{
    ExperimentError, StateMachine, TaskId, Timestamp, ValidationError,
};
use crate::domain::session::Stage;
use crate::ports::RandomSource;

use super::scoring::{
    anchor_bounds, classify_effect, guess_correct, score_estimate, GuessDirection,
};
use super::stage::AnchoringStage;
use super::state::{AnchoringResult, AnchoringState};

/// Estimates may not exceed this multiple of the task's actual value.
pub const MAX_ESTIMATE_FACTOR: f64 = 5.0;

/// User actions of the anchoring experiment.
#[derive(Debug, Clone, PartialEq)]
pub enum AnchoringAction {
    /// Leave the intro for the task list.
    Begin,
    /// Activate a task from the selection screen.
    SelectTask(TaskId),
    /// Draw the random anchor for the active task.
    GenerateAnchor,
    /// Call whether the actual value is higher or lower than the anchor.
    Guess(GuessDirection),
    /// Submit the numeric estimate; completes the task.
    SubmitEstimate(f64),
    /// Redo the active task with a fresh anchor.
    Retry,
    /// Move on to the first not-yet-completed task.
    NextTask,
    /// Abandon the current screen for the task list.
    BackToSelection,
    /// Open the summary over all completed tasks.
    ViewAllResults,
    /// Clear the whole experiment and return to the top-level menu.
    StartOver,
}

/// Result of one anchoring dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchoringOutcome {
    pub stage: Stage,
    /// Present when the action completed a task.
    pub result: Option<AnchoringResult>,
}

impl AnchoringOutcome {
    fn at(stage: Stage) -> Self {
        Self { stage, result: None }
    }
}

/// Applies one user action to the anchoring machine.
pub fn dispatch(
    stage: AnchoringStage,
    action: AnchoringAction,
    state: &mut AnchoringState,
    random: &mut dyn RandomSource,
    config: &SimulatorConfig,
) -> Result<AnchoringOutcome, ExperimentError> {
    use AnchoringAction as A;
    use AnchoringStage as S;

    match (stage, action) {
        (S::Intro, A::Begin) => Ok(AnchoringOutcome::at(step(stage, S::TaskSelection)?)),

        (S::TaskSelection, A::SelectTask(id)) => {
            anchoring_task(id).ok_or(ExperimentError::TaskNotFound(id))?;
            let next = step(stage, S::GenerateAnchor)?;
            state.activate_task(id);
            Ok(AnchoringOutcome::at(next))
        }

        (S::GenerateAnchor, A::GenerateAnchor) => {
            let task = active_task(state)?;
            let (low, high) =
                anchor_bounds(task.actual_value, config.anchor_lower_factor, config.anchor_upper_factor);
            let next = step(stage, S::ShowAnchor)?;

            let anchor = random.next_in_range(low, high);
            state.set_anchor(anchor);
            debug!(task = %task.id, anchor, low, high, "anchor drawn");
            Ok(AnchoringOutcome::at(next))
        }

        (S::ShowAnchor, A::Guess(direction)) => {
            let task = active_task(state)?;
            let anchor = state.anchor().ok_or(ExperimentError::NoActiveTask)?;
            let next = step(stage, S::Estimate)?;

            let correct = guess_correct(direction, task.actual_value, anchor);
            state.set_guess(direction, correct);
            Ok(AnchoringOutcome::at(next))
        }

        (S::Estimate, A::SubmitEstimate(estimate)) => {
            let task = active_task(state)?;
            let anchor = state.anchor().ok_or(ExperimentError::NoActiveTask)?;
            let guess = state.guess().ok_or(ExperimentError::NoActiveTask)?;
            validate_estimate(estimate, task)?;
            let next = step(stage, S::TaskResult)?;

            let score = score_estimate(estimate, task.actual_value, anchor);
            let result = AnchoringResult {
                task_id: task.id,
                task_name: task.name,
                unit: task.unit,
                anchor,
                actual_value: task.actual_value,
                estimate,
                percentage_diff: score.percentage_diff,
                anchor_pull: score.anchor_pull,
                effect: classify_effect(estimate, task.actual_value, anchor),
                guess,
                guess_correct: state.guess_correct().unwrap_or(false),
                recorded_at: Timestamp::now(),
            };
            state.record_result(result.clone());
            debug!(task = %task.id, estimate, anchor_pull = score.anchor_pull, "task completed");
            Ok(AnchoringOutcome { stage: next, result: Some(result) })
        }

        (S::TaskResult, A::Retry) => {
            active_task(state)?;
            let next = step(stage, S::GenerateAnchor)?;
            state.clear_progress();
            Ok(AnchoringOutcome::at(next))
        }

        (S::TaskResult, A::NextTask) => {
            let remaining = anchoring_tasks().map(|t| t.id).find(|id| !state.is_completed(*id));
            match remaining {
                Some(id) => {
                    let next = step(stage, S::GenerateAnchor)?;
                    state.activate_task(id);
                    Ok(AnchoringOutcome::at(next))
                }
                None => {
                    let next = step(stage, S::TaskSelection)?;
                    state.clear_active_task();
                    Ok(AnchoringOutcome::at(next))
                }
            }
        }

        (
            S::GenerateAnchor | S::ShowAnchor | S::Estimate | S::TaskResult | S::AllResults,
            A::BackToSelection,
        ) => {
            let next = step(stage, S::TaskSelection)?;
            state.clear_active_task();
            Ok(AnchoringOutcome::at(next))
        }

        (S::TaskSelection, A::ViewAllResults) => {
            Ok(AnchoringOutcome::at(step(stage, S::AllResults)?))
        }

        (S::AllResults, A::StartOver) => {
            state.reset();
            Ok(AnchoringOutcome::at(Stage::Intro))
        }

        (stage, action) => Err(ExperimentError::invalid_transition(stage, action)),
    }
}

fn step(from: AnchoringStage, to: AnchoringStage) -> Result<Stage, ExperimentError> {
    Ok(Stage::Anchoring(from.transition_to(to)?))
}

fn active_task(state: &AnchoringState) -> Result<&'static AnchoringTask, ExperimentError> {
    let id = state.current_task().ok_or(ExperimentError::NoActiveTask)?;
    anchoring_task(id).ok_or(ExperimentError::TaskNotFound(id))
}

fn validate_estimate(estimate: f64, task: &AnchoringTask) -> Result<(), ExperimentError> {
    let max = task.actual_value * MAX_ESTIMATE_FACTOR;
    if !estimate.is_finite() || estimate < 0.0 || estimate > max {
        return Err(ValidationError::out_of_range("estimate", 0.0, max, estimate).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ScriptedRandomSource;
    use crate::domain::foundation::ErrorCode;

    fn config() -> SimulatorConfig {
        SimulatorConfig::default()
    }

    fn budapest() -> TaskId {
        TaskId::new("budapest")
    }

    /// Drives a fresh state through selection and anchor draw.
    fn drive_to_show_anchor(
        state: &mut AnchoringState,
        random: &mut dyn RandomSource,
        task: TaskId,
    ) -> Stage {
        let cfg = config();
        dispatch(AnchoringStage::TaskSelection, AnchoringAction::SelectTask(task), state, random, &cfg)
            .unwrap();
        dispatch(AnchoringStage::GenerateAnchor, AnchoringAction::GenerateAnchor, state, random, &cfg)
            .unwrap()
            .stage
    }

    #[test]
    fn begin_moves_from_intro_to_selection() {
        let mut state = AnchoringState::new();
        let mut random = ScriptedRandomSource::new([]);
        let outcome =
            dispatch(AnchoringStage::Intro, AnchoringAction::Begin, &mut state, &mut random, &config())
                .unwrap();
        assert_eq!(outcome.stage, Stage::Anchoring(AnchoringStage::TaskSelection));
    }

    #[test]
    fn selecting_an_unknown_task_is_not_found() {
        let mut state = AnchoringState::new();
        let mut random = ScriptedRandomSource::new([]);
        let err = dispatch(
            AnchoringStage::TaskSelection,
            AnchoringAction::SelectTask(TaskId::new("atlantis")),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::TaskNotFound);
        assert!(state.current_task().is_none());
    }

    #[test]
    fn generated_anchor_is_stored_and_in_range() {
        let mut state = AnchoringState::new();
        let mut random = ScriptedRandomSource::new([2_000_000]);
        let stage = drive_to_show_anchor(&mut state, &mut random, budapest());

        assert_eq!(stage, Stage::Anchoring(AnchoringStage::ShowAnchor));
        let anchor = state.anchor().unwrap();
        assert!((526_800..=4_390_000).contains(&anchor));
        assert_eq!(anchor, 2_000_000);
    }

    #[test]
    fn generate_without_active_task_is_recoverable() {
        let mut state = AnchoringState::new();
        let mut random = ScriptedRandomSource::new([0]);
        let err = dispatch(
            AnchoringStage::GenerateAnchor,
            AnchoringAction::GenerateAnchor,
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap_err();
        assert_eq!(err, ExperimentError::NoActiveTask);
    }

    #[test]
    fn guess_against_high_anchor_scores_lower_as_correct() {
        let mut state = AnchoringState::new();
        let mut random = ScriptedRandomSource::new([2_000_000]);
        drive_to_show_anchor(&mut state, &mut random, budapest());

        dispatch(
            AnchoringStage::ShowAnchor,
            AnchoringAction::Guess(GuessDirection::Lower),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();

        assert_eq!(state.guess_correct(), Some(true));
    }

    #[test]
    fn submit_estimate_records_result_and_completes_task() {
        let mut state = AnchoringState::new();
        let mut random = ScriptedRandomSource::new([2_000_000]);
        drive_to_show_anchor(&mut state, &mut random, budapest());
        dispatch(
            AnchoringStage::ShowAnchor,
            AnchoringAction::Guess(GuessDirection::Higher),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();

        let outcome = dispatch(
            AnchoringStage::Estimate,
            AnchoringAction::SubmitEstimate(1_900_000.0),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();

        assert_eq!(outcome.stage, Stage::Anchoring(AnchoringStage::TaskResult));
        let result = outcome.result.unwrap();
        assert_eq!(result.task_id, budapest());
        assert_eq!(result.anchor, 2_000_000);
        assert!(!result.guess_correct);
        assert!(state.is_completed(budapest()));
        assert_eq!(state.results().len(), 1);
    }

    #[test]
    fn resubmitting_a_task_replaces_its_result() {
        let mut state = AnchoringState::new();
        let mut random = ScriptedRandomSource::new([2_000_000, 900_000]);
        let cfg = config();

        for estimate in [1_500_000.0, 1_600_000.0] {
            drive_to_show_anchor(&mut state, &mut random, budapest());
            dispatch(
                AnchoringStage::ShowAnchor,
                AnchoringAction::Guess(GuessDirection::Lower),
                &mut state,
                &mut random,
                &cfg,
            )
            .unwrap();
            dispatch(
                AnchoringStage::Estimate,
                AnchoringAction::SubmitEstimate(estimate),
                &mut state,
                &mut random,
                &cfg,
            )
            .unwrap();
        }

        assert_eq!(state.results().len(), 1);
        assert_eq!(state.result_for(budapest()).unwrap().estimate, 1_600_000.0);
    }

    #[test]
    fn estimate_outside_the_input_range_is_rejected_without_mutation() {
        let mut state = AnchoringState::new();
        let mut random = ScriptedRandomSource::new([2_000_000]);
        drive_to_show_anchor(&mut state, &mut random, budapest());
        dispatch(
            AnchoringStage::ShowAnchor,
            AnchoringAction::Guess(GuessDirection::Lower),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();

        let err = dispatch(
            AnchoringStage::Estimate,
            AnchoringAction::SubmitEstimate(1e12),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap_err();

        assert_eq!(err.code(), ErrorCode::OutOfRange);
        assert!(state.results().is_empty());
        assert!(!state.is_completed(budapest()));
    }

    #[test]
    fn retry_clears_anchor_but_keeps_result() {
        let mut state = AnchoringState::new();
        let mut random = ScriptedRandomSource::new([2_000_000]);
        drive_to_show_anchor(&mut state, &mut random, budapest());
        dispatch(
            AnchoringStage::ShowAnchor,
            AnchoringAction::Guess(GuessDirection::Lower),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();
        dispatch(
            AnchoringStage::Estimate,
            AnchoringAction::SubmitEstimate(1_000_000.0),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();

        let outcome = dispatch(
            AnchoringStage::TaskResult,
            AnchoringAction::Retry,
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();

        assert_eq!(outcome.stage, Stage::Anchoring(AnchoringStage::GenerateAnchor));
        assert!(state.anchor().is_none());
        assert!(state.guess().is_none());
        assert_eq!(state.results().len(), 1);
    }

    #[test]
    fn next_task_picks_first_uncompleted_in_catalog_order() {
        let mut state = AnchoringState::new();
        let mut random = ScriptedRandomSource::new([2_000_000]);
        drive_to_show_anchor(&mut state, &mut random, budapest());
        dispatch(
            AnchoringStage::ShowAnchor,
            AnchoringAction::Guess(GuessDirection::Lower),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();
        dispatch(
            AnchoringStage::Estimate,
            AnchoringAction::SubmitEstimate(1_000_000.0),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();

        dispatch(
            AnchoringStage::TaskResult,
            AnchoringAction::NextTask,
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();

        // budapest is done; the next catalog entry is un_africa.
        assert_eq!(state.current_task(), Some(TaskId::new("un_africa")));
        assert!(state.anchor().is_none());
    }

    #[test]
    fn next_task_with_nothing_left_returns_to_selection() {
        let mut state = AnchoringState::new();
        let mut random = ScriptedRandomSource::new(std::iter::repeat(1).take(10));
        let cfg = config();

        for task in anchoring_tasks() {
            drive_to_show_anchor(&mut state, &mut random, task.id);
            dispatch(
                AnchoringStage::ShowAnchor,
                AnchoringAction::Guess(GuessDirection::Higher),
                &mut state,
                &mut random,
                &cfg,
            )
            .unwrap();
            dispatch(
                AnchoringStage::Estimate,
                AnchoringAction::SubmitEstimate(task.actual_value),
                &mut state,
                &mut random,
                &cfg,
            )
            .unwrap();
        }

        let outcome = dispatch(
            AnchoringStage::TaskResult,
            AnchoringAction::NextTask,
            &mut state,
            &mut random,
            &cfg,
        )
        .unwrap();

        assert_eq!(outcome.stage, Stage::Anchoring(AnchoringStage::TaskSelection));
        assert!(state.current_task().is_none());
    }

    #[test]
    fn back_to_selection_never_fails_from_in_task_stages() {
        let cfg = config();
        for stage in [
            AnchoringStage::GenerateAnchor,
            AnchoringStage::ShowAnchor,
            AnchoringStage::Estimate,
            AnchoringStage::TaskResult,
            AnchoringStage::AllResults,
        ] {
            let mut state = AnchoringState::new();
            let mut random = ScriptedRandomSource::new([]);
            let outcome =
                dispatch(stage, AnchoringAction::BackToSelection, &mut state, &mut random, &cfg)
                    .unwrap();
            assert_eq!(outcome.stage, Stage::Anchoring(AnchoringStage::TaskSelection));
        }
    }

    #[test]
    fn start_over_resets_and_exits_to_menu() {
        let mut state = AnchoringState::new();
        let mut random = ScriptedRandomSource::new([2_000_000]);
        drive_to_show_anchor(&mut state, &mut random, budapest());

        let outcome = dispatch(
            AnchoringStage::AllResults,
            AnchoringAction::StartOver,
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();

        assert_eq!(outcome.stage, Stage::Intro);
        assert_eq!(state, AnchoringState::default());
    }

    #[test]
    fn undefined_pairs_are_invalid_transitions() {
        let mut state = AnchoringState::new();
        let mut random = ScriptedRandomSource::new([]);
        let err = dispatch(
            AnchoringStage::Intro,
            AnchoringAction::SubmitEstimate(1.0),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }
}
