//! `lp-output` — plan persistence and export.
//!
//! Two backends:
//!
//! | Module       | Format | Purpose                                         |
//! |--------------|--------|-------------------------------------------------|
//! | [`json`]     | JSON   | Save/load a [`PlanSnapshot`] (full round-trip)  |
//! | [`timeline`] | CSV    | One-way timeline export for spreadsheets        |
//!
//! A snapshot records the plan's *inputs* (budget, threshold, boundary
//! states, sequence of definition ids and durations, focus), not its derived
//! state — restoring replays the insertions against a live catalog, so the
//! derived state is rebuilt by the engine itself and can never go stale in a
//! file.  Stored definition names are checked against the catalog on restore
//! to catch catalog drift.

pub mod error;
pub mod json;
pub mod snapshot;
pub mod timeline;


pub use error::{OutputError, OutputResult};
pub use json::{load_json, save_json};
pub use snapshot::{PlanSnapshot, SnapshotEntry};
pub use timeline::{save_timeline_csv, write_timeline_csv};
