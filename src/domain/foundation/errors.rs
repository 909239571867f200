//! Error types for the domain layer.

use std::error::Error;
use std::fmt;
use thiserror::Error;

use super::{ScenarioId, TaskId};

/// Errors that occur during value object construction and payload validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // Missing reference errors
    TaskNotFound,
    ScenarioNotFound,
    EvidenceNotFound,
    ResultNotFound,

    // State errors
    NoActiveTask,
    NoActiveScenario,
    StanceAlreadyRecorded,
    StanceNotSet,
    InvalidStateTransition,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::TaskNotFound => "TASK_NOT_FOUND",
            ErrorCode::ScenarioNotFound => "SCENARIO_NOT_FOUND",
            ErrorCode::EvidenceNotFound => "EVIDENCE_NOT_FOUND",
            ErrorCode::ResultNotFound => "RESULT_NOT_FOUND",
            ErrorCode::NoActiveTask => "NO_ACTIVE_TASK",
            ErrorCode::NoActiveScenario => "NO_ACTIVE_SCENARIO",
            ErrorCode::StanceAlreadyRecorded => "STANCE_ALREADY_RECORDED",
            ErrorCode::StanceNotSet => "STANCE_NOT_SET",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
        };
        write!(f, "{}", s)
    }
}

/// Errors surfaced by the experiment controller and transition engines.
///
/// Every variant is recoverable: the presentation layer is expected to offer
/// a path back to the relevant selection stage (missing references, stale
/// state) or to the top-level intro (unknown transitions). Nothing here is
/// process-fatal, and a failed dispatch never mutates session state.
#[derive(Debug, Clone, PartialEq)]
pub enum ExperimentError {
    /// The referenced anchoring task is not in the catalog.
    TaskNotFound(TaskId),
    /// The referenced scenario is not in the catalog.
    ScenarioNotFound(ScenarioId),
    /// An evidence rating referenced an item the scenario does not contain.
    EvidenceNotFound { scenario: ScenarioId, evidence: String },
    /// A result was queried that was never created.
    ResultNotFound { id: String },
    /// The stage requires an active task but none is selected.
    NoActiveTask,
    /// The stage requires an active scenario but none is selected.
    NoActiveScenario,
    /// A stance was already recorded for this scenario in this session.
    StanceAlreadyRecorded(ScenarioId),
    /// Rating was attempted before a stance was recorded.
    StanceNotSet(ScenarioId),
    /// The (stage, action) pair has no defined transition.
    InvalidTransition { stage: String, action: String },
    /// A payload failed validation.
    Validation(ValidationError),
}

impl ExperimentError {
    pub fn invalid_transition(stage: impl fmt::Debug, action: impl fmt::Debug) -> Self {
        ExperimentError::InvalidTransition {
            stage: format!("{:?}", stage),
            action: format!("{:?}", action),
        }
    }

    pub fn result_not_found(id: impl fmt::Display) -> Self {
        ExperimentError::ResultNotFound { id: id.to_string() }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ExperimentError::TaskNotFound(_) => ErrorCode::TaskNotFound,
            ExperimentError::ScenarioNotFound(_) => ErrorCode::ScenarioNotFound,
            ExperimentError::EvidenceNotFound { .. } => ErrorCode::EvidenceNotFound,
            ExperimentError::ResultNotFound { .. } => ErrorCode::ResultNotFound,
            ExperimentError::NoActiveTask => ErrorCode::NoActiveTask,
            ExperimentError::NoActiveScenario => ErrorCode::NoActiveScenario,
            ExperimentError::StanceAlreadyRecorded(_) => ErrorCode::StanceAlreadyRecorded,
            ExperimentError::StanceNotSet(_) => ErrorCode::StanceNotSet,
            ExperimentError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            ExperimentError::Validation(v) => match v {
                ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
                ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
                ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            },
        }
    }

    pub fn message(&self) -> String {
        match self {
            ExperimentError::TaskNotFound(id) => format!("Task not found: {}", id),
            ExperimentError::ScenarioNotFound(id) => format!("Scenario not found: {}", id),
            ExperimentError::EvidenceNotFound { scenario, evidence } => {
                format!("Scenario '{}' has no evidence item '{}'", scenario, evidence)
            }
            ExperimentError::ResultNotFound { id } => format!("Result not found for: {}", id),
            ExperimentError::NoActiveTask => "No task is currently active".to_string(),
            ExperimentError::NoActiveScenario => "No scenario is currently active".to_string(),
            ExperimentError::StanceAlreadyRecorded(id) => {
                format!("Stance already recorded for scenario '{}'", id)
            }
            ExperimentError::StanceNotSet(id) => {
                format!("No stance recorded for scenario '{}'", id)
            }
            ExperimentError::InvalidTransition { stage, action } => {
                format!("No transition from stage {} for action {}", stage, action)
            }
            ExperimentError::Validation(v) => v.to_string(),
        }
    }
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

impl Error for ExperimentError {}

impl From<ValidationError> for ExperimentError {
    fn from(err: ValidationError) -> Self {
        ExperimentError::Validation(err)
    }
}
