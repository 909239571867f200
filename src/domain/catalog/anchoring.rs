//! Anchoring estimation tasks.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::TaskId;

/// An estimation task with a known answer.
///
/// The anchor shown before estimation is drawn from a wide range around
/// `actual_value` (see `anchoring::engine`), so it can land above or below
/// the true value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchoringTask {
    pub id: TaskId,
    pub name: &'static str,
    pub question: &'static str,
    /// True value of the estimated quantity; always positive.
    pub actual_value: f64,
    pub unit: &'static str,
}

/// All anchoring tasks, in selection-screen order.
pub static ANCHORING_TASKS: &[AnchoringTask] = &[
    AnchoringTask {
        id: TaskId::new("budapest"),
        name: "Population of Budapest",
        question: "What is the population of Budapest, Hungary?",
        actual_value: 1_756_000.0,
        unit: "people",
    },
    AnchoringTask {
        id: TaskId::new("un_africa"),
        name: "African Nations in UN",
        question: "What percentage of United Nations member states are African nations?",
        actual_value: 28.0,
        unit: "%",
    },
    AnchoringTask {
        id: TaskId::new("dev_salary"),
        name: "Software Engineer Salary",
        question: "What is the average annual salary of a software engineer in Germany?",
        actual_value: 65_000.0,
        unit: "€",
    },
    AnchoringTask {
        id: TaskId::new("earth_sun"),
        name: "Earth-Sun Distance",
        question: "What is the average distance between Earth and the Sun in kilometers?",
        actual_value: 149_600_000.0,
        unit: "km",
    },
    AnchoringTask {
        id: TaskId::new("amazon_length"),
        name: "Length of Amazon River",
        question: "What is the length of the Amazon River in kilometers?",
        actual_value: 6_400.0,
        unit: "km",
    },
];

static TASKS_BY_ID: Lazy<HashMap<TaskId, &'static AnchoringTask>> =
    Lazy::new(|| ANCHORING_TASKS.iter().map(|t| (t.id, t)).collect());

/// Looks up a task by id.
pub fn anchoring_task(id: TaskId) -> Option<&'static AnchoringTask> {
    TASKS_BY_ID.get(&id).copied()
}

/// Iterates tasks in catalog order.
pub fn anchoring_tasks() -> impl Iterator<Item = &'static AnchoringTask> {
    ANCHORING_TASKS.iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_tasks() {
        assert_eq!(ANCHORING_TASKS.len(), 5);
    }

    #[test]
    fn task_ids_are_unique() {
        assert_eq!(TASKS_BY_ID.len(), ANCHORING_TASKS.len());
    }

    #[test]
    fn all_actual_values_are_positive() {
        for task in anchoring_tasks() {
            assert!(task.actual_value > 0.0, "task {} has non-positive value", task.id);
        }
    }

    #[test]
    fn lookup_finds_known_task() {
        let task = anchoring_task(TaskId::new("budapest")).unwrap();
        assert_eq!(task.actual_value, 1_756_000.0);
        assert_eq!(task.unit, "people");
    }

    #[test]
    fn lookup_misses_unknown_task() {
        assert!(anchoring_task(TaskId::new("atlantis")).is_none());
    }
}
