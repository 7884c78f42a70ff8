//! `lp-engine` — the lesson-plan orchestration engine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`scheduled`]  | `ScheduledActivity` (one catalog entry bound into a plan)|
//! | [`candidate`]  | `CandidateScore`, `CandidateFlags`                       |
//! | [`gaps`]       | Gap analysis: `analyze`, `GapReport`, `GapMeasure`       |
//! | [`efficiency`] | `EfficiencyModel` trait, `NetGainPerMinute` default      |
//! | [`selector`]   | Candidate scoring and the best-candidate tie-break       |
//! | [`plan`]       | `Plan` — mutations, restructuring, focus, auto-fill      |
//! | [`builder`]    | `PlanBuilder`                                            |
//! | [`summary`]    | Serializable plan/candidate views                        |
//! | [`error`]      | `PlanError`, `PlanResult<T>`                             |
//!
//! # Control flow (summary)
//!
//! Every mutation — insert, exchange, remove, reset, set_duration — first
//! validates its arguments, then splices the sequence, then *restructures*:
//!
//! ```text
//! restructure = replay sequence from the start state
//!             → re-derive offsets, start/end states, elapsed time, reached
//!             → gap analysis (hard-gap list + remaining distance)
//!             → candidate rescoring for the current focus
//! ```
//!
//! A failed validation leaves the plan untouched; restructuring itself is
//! deterministic and idempotent.  The engine is single-threaded and
//! synchronous: callers sharing one `Plan` across threads must serialize
//! access themselves.

pub mod builder;
pub mod candidate;
pub mod efficiency;
pub mod error;
pub mod gaps;
pub mod plan;
pub mod scheduled;
pub mod selector;
pub mod summary;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::PlanBuilder;
pub use candidate::{CandidateFlags, CandidateScore};
pub use efficiency::{EfficiencyInputs, EfficiencyModel, NetGainPerMinute};
pub use error::{PlanError, PlanResult};
pub use gaps::{GapMeasure, GapReport, analyze};
pub use plan::{DEFAULT_HARD_GAP_THRESHOLD, Plan};
pub use scheduled::ScheduledActivity;
pub use summary::{CandidateView, PlanSummary, ScheduledView};
