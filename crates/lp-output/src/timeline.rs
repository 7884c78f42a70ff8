//! CSV timeline export.
//!
//! One row per scheduled entry, in plan order:
//!
//! ```csv
//! name,starts_after,duration,plane
//! warmup,0,15,class
//! drill,15,20,individual
//! ```
//!
//! Durations and offsets are written as plain minute counts.  Plane ids are
//! resolved through the given registry; an unresolvable id is an error, not
//! a blank cell.

use std::io::Write;
use std::path::Path;

use csv::Writer;

use lp_core::PlaneRegistry;
use lp_engine::{EfficiencyModel, Plan};

use crate::error::{OutputError, OutputResult};

/// Write the plan's timeline as CSV to any `Write` sink.
pub fn write_timeline_csv<W: Write, E: EfficiencyModel>(
    sink: W,
    plan: &Plan<E>,
    planes: &PlaneRegistry,
) -> OutputResult<()> {
    let mut writer = Writer::from_writer(sink);
    writer.write_record(["name", "starts_after", "duration", "plane"])?;

    for view in plan.summary().activities {
        let plane = planes.name_of(view.plane).ok_or_else(|| {
            OutputError::Mismatch(format!("{} is not in the plane registry", view.plane))
        })?;
        writer.write_record(&[
            view.name,
            view.starts_after.0.to_string(),
            view.duration.0.to_string(),
            plane.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// [`write_timeline_csv`] into a file at `path`.
pub fn save_timeline_csv<E: EfficiencyModel>(
    path: &Path,
    plan: &Plan<E>,
    planes: &PlaneRegistry,
) -> OutputResult<()> {
    let file = std::fs::File::create(path)?;
    write_timeline_csv(file, plan, planes)
}
