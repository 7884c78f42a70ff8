//! `lp-core` — foundational types for the `rust_lp` lesson-plan orchestration
//! engine.
//!
//! This crate is a dependency of every other `lp-*` crate.  It intentionally
//! has no `lp-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `ActivityId`, `PlaneId`                                |
//! | [`progress`] | `ProgressState`, `Effect`, forward distance            |
//! | [`effect`]   | `EffectProfile` (duration-interpolated effects)        |
//! | [`time`]     | `Minutes`                                              |
//! | [`plane`]    | `PlaneRegistry`, `PlaneInfo`                           |
//! | [`error`]    | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. Required by `lp-output`. |

pub mod effect;
pub mod error;
pub mod ids;
pub mod plane;
pub mod progress;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use effect::EffectProfile;
pub use error::{CoreError, CoreResult};
pub use ids::{ActivityId, PlaneId};
pub use plane::{PlaneInfo, PlaneRegistry};
pub use progress::{Effect, ProgressState};
pub use time::Minutes;
