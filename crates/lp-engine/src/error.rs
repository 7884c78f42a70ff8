use lp_core::{ActivityId, Minutes};
use thiserror::Error;

/// Recoverable failures of plan operations.
///
/// Every variant is detected *before* the plan is mutated: an operation that
/// returns an error leaves the plan exactly as it was.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("index {index} out of bounds (sequence length {len})")]
    InvalidIndex { index: usize, len: usize },

    #[error("no definition {0} in the catalog")]
    UnknownDefinition(ActivityId),

    #[error("no gap is focused")]
    NoFocus,

    #[error("no candidate is recommended for the focused gap")]
    NoRecommendation,

    #[error("cannot score candidates against an empty catalog")]
    EmptyCatalog,

    #[error("no hard gap remains to fill")]
    NoHardGap,

    #[error("activity {0} has a fixed duration")]
    DurationFixed(ActivityId),

    #[error("duration {requested} outside [{min}, {max}] for activity {id}")]
    DurationOutOfRange {
        id: ActivityId,
        requested: Minutes,
        min: Minutes,
        max: Minutes,
    },
}

pub type PlanResult<T> = Result<T, PlanError>;
