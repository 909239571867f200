//! Content Catalog - immutable definitions of tasks and scenarios.
//!
//! Everything here is compiled in and loaded once: five anchoring tasks,
//! three confirmation scenarios plus the fixed 2-4-6 rule task, and ten
//! framing scenarios across three sub-experiments. Session state references
//! catalog entries by id and never owns them.

mod anchoring;
mod confirmation;
mod framing;

pub use anchoring::{anchoring_task, anchoring_tasks, AnchoringTask, ANCHORING_TASKS};
pub use confirmation::{
    confirmation_scenario, confirmation_scenarios, ConfirmationScenario, EvidenceItem,
    EvidenceKind, StanceGroup, StanceOption, CONFIRMATION_SCENARIOS, WASON_RULE_SYNONYMS,
    WASON_SEED_SEQUENCE,
};
pub use framing::{
    framing_scenario, framing_scenarios, FramingFamily, FramingPrompt, FramingScenario,
    RiskOptions, FRAMING_SCENARIOS,
};
