//! Confirmation transition engine for both sub-flows.
//!
//! The Wason rule-discovery loop and the evidence-evaluation scenarios share
//! one dispatcher because they share the family intro and a session is only
//! ever in one of them. A failed dispatch leaves state untouched.

use tracing::debug;

use crate::config::SimulatorConfig;
use crate::domain::catalog::{confirmation_scenario, ConfirmationScenario};
use crate::domain::foundation::{
    EvidenceId, ExperimentError, Rating, ScenarioId, StateMachine, ValidationError,
};
use crate::domain::session::Stage;

use super::evidence::{score_scenario, EvidenceReport};
use super::stage::ConfirmationStage;
use super::state::{ConfirmationState, StanceRecord, WasonTest};
use super::wason::rule_guess_is_correct;

/// User actions of the confirmation experiment.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmationAction {
    /// From the family menu into the Wason instructions.
    StartWason,
    /// From the instructions into the testing loop.
    BeginWason,
    /// Probe a sequence against the hidden rule.
    TestSequence(Vec<i64>),
    /// Guess the rule in free text.
    GuessRule(String),
    /// After a wrong guess, keep testing.
    ContinueTesting,
    /// After a wrong guess, give up and see the answer.
    RevealAnswer,
    /// From the success screen, clear the Wason state and start over.
    RetryWason,
    /// From the family menu into the scenario list.
    StartEvidence,
    /// Activate a scenario from the selection screen.
    SelectScenario(ScenarioId),
    /// Record the stance (asked exactly once per scenario).
    SubmitStance { option_index: usize, strength: Rating },
    /// Rate one evidence item of the active scenario.
    RateEvidence { evidence: EvidenceId, rating: Rating },
    /// Score the recorded ratings; completes the scenario.
    SubmitRatings,
    /// From the results, pick a different scenario.
    AnotherScenario,
    /// From the results, jump to the Wason task.
    SwitchToWason,
    /// Abandon the active scenario for the selection screen.
    BackToSelection,
    /// Back to the family menu from an entry screen (state kept).
    BackToConfirmationMenu,
    /// Clear the whole experiment and return to the top-level menu.
    FinishConfirmation,
}

/// What a confirmation dispatch produced, if anything.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmationEvent {
    /// A probe was classified and logged.
    Test(WasonTest),
    /// A rule guess was evaluated.
    RuleGuess { guess: String, correct: bool },
    /// A scenario was scored.
    Report(EvidenceReport),
}

/// Result of one confirmation dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationOutcome {
    pub stage: Stage,
    pub produced: Option<ConfirmationEvent>,
}

impl ConfirmationOutcome {
    fn at(stage: Stage) -> Self {
        Self { stage, produced: None }
    }
}

/// Applies one user action to the confirmation machine.
///
/// The `_config` parameter is unused today but keeps the engine signature
/// uniform across families.
pub fn dispatch(
    stage: ConfirmationStage,
    action: ConfirmationAction,
    state: &mut ConfirmationState,
    _config: &SimulatorConfig,
) -> Result<ConfirmationOutcome, ExperimentError> {
    use ConfirmationAction as A;
    use ConfirmationStage as S;

    match (stage, action) {
        // ── Wason sub-flow ──────────────────────────────────────────────
        (S::Intro, A::StartWason) => Ok(ConfirmationOutcome::at(step(stage, S::WasonIntro)?)),

        (S::WasonIntro, A::BeginWason) => Ok(ConfirmationOutcome::at(step(stage, S::WasonTask)?)),

        (S::WasonTask, A::TestSequence(sequence)) => {
            if sequence.is_empty() {
                return Err(ValidationError::empty_field("sequence").into());
            }
            let next = step(stage, S::WasonTask)?;

            let test = WasonTest::classify(sequence);
            debug!(
                follows_rule = test.follows_rule,
                is_confirming = test.is_confirming,
                "sequence tested"
            );
            state.wason.record_test(test.clone());
            Ok(ConfirmationOutcome {
                stage: next,
                produced: Some(ConfirmationEvent::Test(test)),
            })
        }

        (S::WasonTask, A::GuessRule(guess)) => {
            if guess.trim().is_empty() {
                return Err(ValidationError::empty_field("rule_guess").into());
            }
            let correct = rule_guess_is_correct(&guess);
            let next = step(stage, if correct { S::WasonSuccess } else { S::WasonIncorrect })?;

            state.wason.record_guess(guess.clone());
            debug!(correct, "rule guessed");
            Ok(ConfirmationOutcome {
                stage: next,
                produced: Some(ConfirmationEvent::RuleGuess { guess, correct }),
            })
        }

        (S::WasonIncorrect, A::ContinueTesting) => {
            Ok(ConfirmationOutcome::at(step(stage, S::WasonTask)?))
        }

        (S::WasonIncorrect, A::RevealAnswer) => {
            Ok(ConfirmationOutcome::at(step(stage, S::WasonSuccess)?))
        }

        (S::WasonSuccess, A::RetryWason) => {
            let next = step(stage, S::WasonIntro)?;
            state.wason.reset();
            Ok(ConfirmationOutcome::at(next))
        }

        // ── Evidence sub-flow ───────────────────────────────────────────
        (S::Intro, A::StartEvidence) => {
            Ok(ConfirmationOutcome::at(step(stage, S::ScenarioSelection)?))
        }

        (S::ScenarioSelection, A::SelectScenario(id)) => {
            confirmation_scenario(id).ok_or(ExperimentError::ScenarioNotFound(id))?;
            let next = step(stage, S::ScenarioTask)?;
            state.evidence.activate_scenario(id);
            Ok(ConfirmationOutcome::at(next))
        }

        (S::ScenarioTask, A::SubmitStance { option_index, strength }) => {
            let scenario = active_scenario(state)?;
            if state.evidence.has_stance(scenario.id) {
                return Err(ExperimentError::StanceAlreadyRecorded(scenario.id));
            }
            let option = scenario.stance_option(option_index).ok_or_else(|| {
                ValidationError::out_of_range(
                    "stance_option",
                    0.0,
                    (scenario.stance_options.len() - 1) as f64,
                    option_index as f64,
                )
            })?;
            let next = step(stage, S::ScenarioTask)?;

            state.evidence.record_stance(
                scenario.id,
                StanceRecord {
                    option_label: option.label,
                    group: option.group,
                    strength,
                },
            );
            Ok(ConfirmationOutcome::at(next))
        }

        (S::ScenarioTask, A::RateEvidence { evidence, rating }) => {
            let scenario = active_scenario(state)?;
            if !state.evidence.has_stance(scenario.id) {
                return Err(ExperimentError::StanceNotSet(scenario.id));
            }
            scenario.evidence_item(evidence).ok_or_else(|| ExperimentError::EvidenceNotFound {
                scenario: scenario.id,
                evidence: evidence.to_string(),
            })?;
            let next = step(stage, S::ScenarioTask)?;

            state.evidence.rate(evidence, rating);
            Ok(ConfirmationOutcome::at(next))
        }

        (S::ScenarioTask, A::SubmitRatings) => {
            let scenario = active_scenario(state)?;
            let stance = *state
                .evidence
                .stance_for(scenario.id)
                .ok_or(ExperimentError::StanceNotSet(scenario.id))?;
            let next = step(stage, S::ScenarioResults)?;

            let report = score_scenario(scenario, stance, state.evidence.ratings());
            debug!(scenario = %scenario.id, bias_score = report.bias_score, "scenario scored");
            state.evidence.record_report(report.clone());
            Ok(ConfirmationOutcome {
                stage: next,
                produced: Some(ConfirmationEvent::Report(report)),
            })
        }

        (S::ScenarioTask, A::BackToSelection) | (S::ScenarioResults, A::AnotherScenario) => {
            let next = step(stage, S::ScenarioSelection)?;
            state.evidence.clear_active_scenario();
            Ok(ConfirmationOutcome::at(next))
        }

        (S::ScenarioResults, A::SwitchToWason) => {
            let next = step(stage, S::WasonIntro)?;
            state.evidence.clear_active_scenario();
            Ok(ConfirmationOutcome::at(next))
        }

        // ── Shared exits ────────────────────────────────────────────────
        (S::WasonIntro | S::ScenarioSelection, A::BackToConfirmationMenu) => {
            Ok(ConfirmationOutcome::at(step(stage, S::Intro)?))
        }

        (S::WasonSuccess | S::ScenarioResults, A::FinishConfirmation) => {
            state.reset();
            Ok(ConfirmationOutcome::at(Stage::Intro))
        }

        (stage, action) => Err(ExperimentError::invalid_transition(stage, action)),
    }
}

fn step(from: ConfirmationStage, to: ConfirmationStage) -> Result<Stage, ExperimentError> {
    Ok(Stage::Confirmation(from.transition_to(to)?))
}

fn active_scenario(
    state: &ConfirmationState,
) -> Result<&'static ConfirmationScenario, ExperimentError> {
    let id = state.evidence.current_scenario().ok_or(ExperimentError::NoActiveScenario)?;
    confirmation_scenario(id).ok_or(ExperimentError::ScenarioNotFound(id))
}
