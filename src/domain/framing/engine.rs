//! Framing transition engine.
//!
//! The one semantic twist of this family is the frame assignment: selecting
//! a scenario draws one frame variant at random, and that assignment is
//! pinned in state and copied into the result so it cannot silently change
//! between the experiment and result screens.

use tracing::debug;

use crate::config::SimulatorConfig;
use crate::domain::catalog::{framing_scenario, FramingFamily, FramingPrompt, FramingScenario};
use crate::domain::foundation::{ExperimentError, Rating, ScenarioId, StateMachine, Timestamp};
use crate::domain::session::Stage;
use crate::ports::RandomSource;

use super::stage::FramingStage;
use super::state::{Frame, FramingResponse, FramingResult, FramingState, RiskChoice};

/// User actions of the framing experiment.
#[derive(Debug, Clone, PartialEq)]
pub enum FramingAction {
    /// Leave the intro for the sub-experiment list.
    Begin,
    /// Pick a sub-experiment.
    SelectFamily(FramingFamily),
    /// Activate a scenario; draws and pins its frame.
    SelectScenario(ScenarioId),
    /// Risk scenarios: choose the sure option or the gamble.
    ChooseOption(RiskChoice),
    /// Attribute/goal scenarios: submit the 1-10 evaluation.
    SubmitRating(Rating),
    /// From the result, pick another scenario of the same family.
    AnotherScenario,
    /// Switch to a different sub-experiment.
    ChangeFamily,
    /// Open the summary over all completed framing scenarios.
    ViewAllResults,
    /// Abandon the framed prompt for the scenario list.
    BackToSelection,
    /// From the summary back to the sub-experiment list.
    MoreExperiments,
}

/// Result of one framing dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct FramingOutcome {
    pub stage: Stage,
    /// Present when the action completed a scenario.
    pub result: Option<FramingResult>,
}

impl FramingOutcome {
    fn at(stage: Stage) -> Self {
        Self { stage, result: None }
    }
}

/// Applies one user action to the framing machine.
pub fn dispatch(
    stage: FramingStage,
    action: FramingAction,
    state: &mut FramingState,
    random: &mut dyn RandomSource,
    _config: &SimulatorConfig,
) -> Result<FramingOutcome, ExperimentError> {
    use FramingAction as A;
    use FramingStage as S;

    match (stage, action) {
        (S::Intro, A::Begin) => Ok(FramingOutcome::at(step(stage, S::TypeSelection)?)),

        (S::TypeSelection, A::SelectFamily(family)) => {
            let next = step(stage, S::ScenarioSelection)?;
            state.choose_family(family);
            Ok(FramingOutcome::at(next))
        }

        (S::ScenarioSelection, A::SelectScenario(id)) => {
            // A missing family here means stale navigation state; the list
            // the user picked from no longer exists.
            let family = state.family().ok_or(ExperimentError::NoActiveScenario)?;
            let scenario =
                framing_scenario(id).ok_or(ExperimentError::ScenarioNotFound(id))?;
            if scenario.family() != family {
                return Err(ExperimentError::ScenarioNotFound(id));
            }
            let next = step(stage, S::Experiment)?;

            let candidates = Frame::candidates(family);
            let frame = candidates[random.next_index(candidates.len())];
            state.activate_scenario(id, frame);
            debug!(scenario = %id, frame = frame.label(), "frame assigned");
            Ok(FramingOutcome::at(next))
        }

        (S::Experiment, A::ChooseOption(choice)) => {
            let (scenario, frame) = active_scenario(state)?;
            if !matches!(scenario.prompt, FramingPrompt::Risk { .. }) {
                return Err(ExperimentError::invalid_transition(stage, A::ChooseOption(choice)));
            }
            record_response(state, stage, scenario, frame, FramingResponse::Choice(choice))
        }

        (S::Experiment, A::SubmitRating(rating)) => {
            let (scenario, frame) = active_scenario(state)?;
            if matches!(scenario.prompt, FramingPrompt::Risk { .. }) {
                return Err(ExperimentError::invalid_transition(stage, A::SubmitRating(rating)));
            }
            record_response(state, stage, scenario, frame, FramingResponse::Rating(rating))
        }

        (S::Experiment, A::BackToSelection) | (S::FrameResult, A::AnotherScenario) => {
            let next = step(stage, S::ScenarioSelection)?;
            state.clear_active_scenario();
            Ok(FramingOutcome::at(next))
        }

        (S::ScenarioSelection | S::FrameResult, A::ChangeFamily) => {
            let next = step(stage, S::TypeSelection)?;
            state.clear_family();
            Ok(FramingOutcome::at(next))
        }

        (S::TypeSelection | S::FrameResult, A::ViewAllResults) => {
            let next = step(stage, S::AllResults)?;
            state.clear_active_scenario();
            Ok(FramingOutcome::at(next))
        }

        (S::AllResults, A::MoreExperiments) => {
            let next = step(stage, S::TypeSelection)?;
            state.clear_family();
            Ok(FramingOutcome::at(next))
        }

        (stage, action) => Err(ExperimentError::invalid_transition(stage, action)),
    }
}

fn step(from: FramingStage, to: FramingStage) -> Result<Stage, ExperimentError> {
    Ok(Stage::Framing(from.transition_to(to)?))
}

fn active_scenario(
    state: &FramingState,
) -> Result<(&'static FramingScenario, Frame), ExperimentError> {
    let id = state.current_scenario().ok_or(ExperimentError::NoActiveScenario)?;
    let frame = state.frame().ok_or(ExperimentError::NoActiveScenario)?;
    let scenario = framing_scenario(id).ok_or(ExperimentError::ScenarioNotFound(id))?;
    Ok((scenario, frame))
}

fn record_response(
    state: &mut FramingState,
    stage: FramingStage,
    scenario: &'static FramingScenario,
    frame: Frame,
    response: FramingResponse,
) -> Result<FramingOutcome, ExperimentError> {
    let next = step(stage, FramingStage::FrameResult)?;

    let result = FramingResult {
        scenario_id: scenario.id,
        scenario_title: scenario.title,
        family: scenario.family(),
        frame,
        response,
        recorded_at: Timestamp::now(),
    };
    state.record_result(result.clone());
    debug!(scenario = %scenario.id, frame = frame.label(), "framing response recorded");
    Ok(FramingOutcome { stage: next, result: Some(result) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ScriptedRandomSource;
    use crate::domain::foundation::ErrorCode;

    fn config() -> SimulatorConfig {
        SimulatorConfig::default()
    }

    fn rating(value: u8) -> Rating {
        Rating::try_new(value).unwrap()
    }

    fn state_in_family(family: FramingFamily) -> FramingState {
        let mut state = FramingState::new();
        let mut random = ScriptedRandomSource::new([]);
        dispatch(
            FramingStage::TypeSelection,
            FramingAction::SelectFamily(family),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();
        state
    }

    #[test]
    fn selecting_a_family_reaches_scenario_selection() {
        let state = state_in_family(FramingFamily::Risk);
        assert_eq!(state.family(), Some(FramingFamily::Risk));
    }

    #[test]
    fn selecting_a_scenario_draws_a_frame_from_its_family() {
        let mut state = state_in_family(FramingFamily::Goal);
        // Index 1 of [Gain, Loss, Neutral].
        let mut random = ScriptedRandomSource::new([1]);

        let outcome = dispatch(
            FramingStage::ScenarioSelection,
            FramingAction::SelectScenario(ScenarioId::new("retirement_saving")),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();

        assert_eq!(outcome.stage, Stage::Framing(FramingStage::Experiment));
        assert_eq!(state.frame(), Some(Frame::Loss));
    }

    #[test]
    fn scenario_from_another_family_is_not_found() {
        let mut state = state_in_family(FramingFamily::Risk);
        let mut random = ScriptedRandomSource::new([0]);

        let err = dispatch(
            FramingStage::ScenarioSelection,
            FramingAction::SelectScenario(ScenarioId::new("ground_beef")),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ScenarioNotFound);
        assert!(state.current_scenario().is_none());
    }

    #[test]
    fn risk_choice_records_the_assigned_frame() {
        let mut state = state_in_family(FramingFamily::Risk);
        let mut random = ScriptedRandomSource::new([1]); // Negative
        dispatch(
            FramingStage::ScenarioSelection,
            FramingAction::SelectScenario(ScenarioId::new("disease_problem")),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();

        let outcome = dispatch(
            FramingStage::Experiment,
            FramingAction::ChooseOption(RiskChoice::B),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();

        assert_eq!(outcome.stage, Stage::Framing(FramingStage::FrameResult));
        let result = outcome.result.unwrap();
        assert_eq!(result.frame, Frame::Negative);
        assert_eq!(result.frame, state.frame().unwrap());
        assert_eq!(result.response, FramingResponse::Choice(RiskChoice::B));
    }

    #[test]
    fn rating_a_risk_scenario_is_invalid() {
        let mut state = state_in_family(FramingFamily::Risk);
        let mut random = ScriptedRandomSource::new([0]);
        dispatch(
            FramingStage::ScenarioSelection,
            FramingAction::SelectScenario(ScenarioId::new("disease_problem")),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();

        let err = dispatch(
            FramingStage::Experiment,
            FramingAction::SubmitRating(rating(7)),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn choosing_an_option_on_a_rating_scenario_is_invalid() {
        let mut state = state_in_family(FramingFamily::Attribute);
        let mut random = ScriptedRandomSource::new([0]);
        dispatch(
            FramingStage::ScenarioSelection,
            FramingAction::SelectScenario(ScenarioId::new("ground_beef")),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();

        let err = dispatch(
            FramingStage::Experiment,
            FramingAction::ChooseOption(RiskChoice::A),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn rerunning_a_scenario_replaces_its_result() {
        let mut state = state_in_family(FramingFamily::Attribute);
        let mut random = ScriptedRandomSource::new([0, 1]);
        let cfg = config();

        for value in [4, 9] {
            dispatch(
                FramingStage::ScenarioSelection,
                FramingAction::SelectScenario(ScenarioId::new("ground_beef")),
                &mut state,
                &mut random,
                &cfg,
            )
            .unwrap();
            dispatch(
                FramingStage::Experiment,
                FramingAction::SubmitRating(rating(value)),
                &mut state,
                &mut random,
                &cfg,
            )
            .unwrap();
            dispatch(
                FramingStage::FrameResult,
                FramingAction::AnotherScenario,
                &mut state,
                &mut random,
                &cfg,
            )
            .unwrap();
        }

        assert_eq!(state.results().len(), 1);
        let result = state.result_for(ScenarioId::new("ground_beef")).unwrap();
        assert_eq!(result.frame, Frame::Negative);
        assert_eq!(result.response, FramingResponse::Rating(rating(9)));
    }

    #[test]
    fn acting_without_an_active_scenario_is_recoverable() {
        let mut state = state_in_family(FramingFamily::Risk);
        let mut random = ScriptedRandomSource::new([]);

        let err = dispatch(
            FramingStage::Experiment,
            FramingAction::ChooseOption(RiskChoice::A),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap_err();
        assert_eq!(err, ExperimentError::NoActiveScenario);

        let outcome = dispatch(
            FramingStage::Experiment,
            FramingAction::BackToSelection,
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();
        assert_eq!(outcome.stage, Stage::Framing(FramingStage::ScenarioSelection));
    }

    #[test]
    fn view_all_results_clears_the_active_scenario() {
        let mut state = state_in_family(FramingFamily::Goal);
        let mut random = ScriptedRandomSource::new([0]);
        dispatch(
            FramingStage::ScenarioSelection,
            FramingAction::SelectScenario(ScenarioId::new("retirement_saving")),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();
        dispatch(
            FramingStage::Experiment,
            FramingAction::SubmitRating(rating(6)),
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();

        let outcome = dispatch(
            FramingStage::FrameResult,
            FramingAction::ViewAllResults,
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();

        assert_eq!(outcome.stage, Stage::Framing(FramingStage::AllResults));
        assert!(state.current_scenario().is_none());
        assert!(state.frame().is_none());
    }

    #[test]
    fn more_experiments_returns_to_type_selection_without_a_family() {
        let mut state = state_in_family(FramingFamily::Risk);
        let mut random = ScriptedRandomSource::new([]);
        let outcome = dispatch(
            FramingStage::AllResults,
            FramingAction::MoreExperiments,
            &mut state,
            &mut random,
            &config(),
        )
        .unwrap();

        assert_eq!(outcome.stage, Stage::Framing(FramingStage::TypeSelection));
        assert!(state.family().is_none());
    }
}
