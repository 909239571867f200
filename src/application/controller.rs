//! The experiment controller: one dispatch entry point per session.
//!
//! The `Simulator` owns the session state, the configuration, and the
//! randomness source, and processes one user action to completion before
//! returning - strictly request/response, no async, no background work. The
//! presentation layer feeds it [`Action`]s and renders whatever stage and
//! state come back.

use tracing::debug;

use crate::config::SimulatorConfig;
use crate::domain::anchoring::{self, AnchoringAction, AnchoringResult, AnchoringSummary};
use crate::domain::catalog::confirmation_scenario;
use crate::domain::confirmation::{
    self, presentation_order, strategy, ConfirmationAction, ConfirmationEvent, EvidenceReport,
    WasonStrategy, WasonTest,
};
use crate::domain::foundation::{EvidenceId, ExperimentError, ScenarioId};
use crate::domain::framing::{self, FramingAction, FramingResult, FramingSummary};
use crate::domain::session::{ExperimentFamily, SessionState, Stage};
use crate::ports::RandomSource;

/// A user action, across all experiments.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// From the top-level menu into an experiment family.
    SelectExperiment(ExperimentFamily),
    /// Back to the top-level menu from anywhere; accumulated state is kept.
    ReturnToMenu,
    /// Reset every experiment and return to the top-level menu.
    ResetAll,
    /// An anchoring-family action; valid while its machine is active.
    Anchoring(AnchoringAction),
    /// A confirmation-family action; valid while its machine is active.
    Confirmation(ConfirmationAction),
    /// A framing-family action; valid while its machine is active.
    Framing(FramingAction),
}

/// A result record produced by a dispatch, tagged by family.
#[derive(Debug, Clone, PartialEq)]
pub enum ExperimentResult {
    Anchoring(AnchoringResult),
    WasonTest(WasonTest),
    WasonRuleGuess { guess: String, correct: bool },
    Evidence(EvidenceReport),
    Framing(FramingResult),
}

/// What one dispatch did: the stage to render next, and any produced result.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub stage: Stage,
    pub produced: Option<ExperimentResult>,
}

impl DispatchOutcome {
    fn at(stage: Stage) -> Self {
        Self { stage, produced: None }
    }
}

/// Flow controller for one user session.
pub struct Simulator {
    config: SimulatorConfig,
    state: SessionState,
    random: Box<dyn RandomSource>,
}

impl Simulator {
    /// Creates a simulator with default configuration and the production
    /// randomness source.
    pub fn new() -> Self {
        Self::with_parts(
            SimulatorConfig::default(),
            Box::new(crate::adapters::ThreadRngSource::new()),
        )
    }

    /// Creates a simulator from explicit parts; tests use this with a
    /// scripted randomness source.
    pub fn with_parts(config: SimulatorConfig, random: Box<dyn RandomSource>) -> Self {
        Self {
            config,
            state: SessionState::new(),
            random,
        }
    }

    /// The current stage.
    pub fn stage(&self) -> Stage {
        self.state.stage()
    }

    /// Read access to the live session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// A cloned, serializable snapshot of the session state.
    ///
    /// Two snapshots taken without an intervening dispatch are identical.
    pub fn snapshot(&self) -> SessionState {
        self.state.clone()
    }

    /// Applies one user action and returns the next stage plus any produced
    /// result. A failed dispatch leaves the session state unchanged.
    pub fn dispatch(&mut self, action: Action) -> Result<DispatchOutcome, ExperimentError> {
        let from = self.state.stage();
        let outcome = self.route(from, action)?;
        self.state.set_stage(outcome.stage);
        debug!(?from, to = ?outcome.stage, "stage transition");
        Ok(outcome)
    }

    fn route(&mut self, from: Stage, action: Action) -> Result<DispatchOutcome, ExperimentError> {
        match (from, action) {
            (Stage::Intro, Action::SelectExperiment(family)) => {
                Ok(DispatchOutcome::at(Stage::entry(family)))
            }

            (_, Action::ReturnToMenu) => {
                self.state.deactivate_all();
                Ok(DispatchOutcome::at(Stage::Intro))
            }

            (_, Action::ResetAll) => {
                self.state.reset();
                Ok(DispatchOutcome::at(Stage::Intro))
            }

            (Stage::Anchoring(stage), Action::Anchoring(action)) => {
                let outcome = anchoring::dispatch(
                    stage,
                    action,
                    &mut self.state.anchoring,
                    self.random.as_mut(),
                    &self.config,
                )?;
                Ok(DispatchOutcome {
                    stage: outcome.stage,
                    produced: outcome.result.map(ExperimentResult::Anchoring),
                })
            }

            (Stage::Confirmation(stage), Action::Confirmation(action)) => {
                let outcome = confirmation::dispatch(
                    stage,
                    action,
                    &mut self.state.confirmation,
                    &self.config,
                )?;
                Ok(DispatchOutcome {
                    stage: outcome.stage,
                    produced: outcome.produced.map(|event| match event {
                        ConfirmationEvent::Test(test) => ExperimentResult::WasonTest(test),
                        ConfirmationEvent::RuleGuess { guess, correct } => {
                            ExperimentResult::WasonRuleGuess { guess, correct }
                        }
                        ConfirmationEvent::Report(report) => ExperimentResult::Evidence(report),
                    }),
                })
            }

            (Stage::Framing(stage), Action::Framing(action)) => {
                let outcome = framing::dispatch(
                    stage,
                    action,
                    &mut self.state.framing,
                    self.random.as_mut(),
                    &self.config,
                )?;
                Ok(DispatchOutcome {
                    stage: outcome.stage,
                    produced: outcome.result.map(ExperimentResult::Framing),
                })
            }

            (stage, action) => Err(ExperimentError::invalid_transition(stage, action)),
        }
    }

    // ── Queries for the presentation layer ──────────────────────────────

    /// Evidence ids of a scenario in their fixed presentation order.
    pub fn evidence_presentation_order(
        &self,
        scenario: ScenarioId,
    ) -> Result<Vec<EvidenceId>, ExperimentError> {
        let scenario =
            confirmation_scenario(scenario).ok_or(ExperimentError::ScenarioNotFound(scenario))?;
        Ok(presentation_order(scenario, self.config.evidence_shuffle_seed))
    }

    /// Summary over completed anchoring tasks; `None` when none exist.
    pub fn anchoring_summary(&self) -> Option<AnchoringSummary> {
        anchoring::summarize(self.state.anchoring.results())
    }

    /// Wason testing-strategy summary; `None` when no probes were recorded.
    pub fn wason_strategy(&self) -> Option<WasonStrategy> {
        strategy(&self.state.confirmation.wason)
    }

    /// Summary over completed framing scenarios; `None` when none exist.
    pub fn framing_summary(&self) -> Option<FramingSummary> {
        framing::summarize(self.state.framing.results())
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
