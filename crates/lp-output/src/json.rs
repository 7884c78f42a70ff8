//! JSON snapshot files.
//!
//! Paths without a `.json` extension get one appended, so callers can pass
//! bare lesson names.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::error::OutputResult;
use crate::snapshot::PlanSnapshot;

/// Write `snapshot` to `path` as pretty-printed JSON.
///
/// Returns the path actually written (extension included).
pub fn save_json(path: &Path, snapshot: &PlanSnapshot) -> OutputResult<PathBuf> {
    let path = with_json_ext(path);
    let file = File::create(&path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), snapshot)?;
    Ok(path)
}

/// Read a snapshot back from `path`.
pub fn load_json(path: &Path) -> OutputResult<PlanSnapshot> {
    let path = with_json_ext(path);
    let file = File::open(&path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn with_json_ext(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext == "json" => path.to_path_buf(),
        _ => path.with_extension("json"),
    }
}
