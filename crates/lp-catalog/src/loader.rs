//! CSV catalog loader.
//!
//! # CSV format
//!
//! One row per activity definition.  Progress pairs are encoded `"x;y"`
//! (semicolon so the pair survives CSV comma splitting).
//!
//! ```csv
//! name,precondition,min_effect,min_minutes,max_effect,max_minutes,default_minutes,max_repetitions,plane
//! warmup,0;0,0.1;0,10,0.3;0.1,30,15,2,class
//! drill,0.2;0,,,0.3;0,20,,3,individual
//! ```
//!
//! **Fixed-duration rows** leave `default_minutes` empty: the `max_effect` /
//! `max_minutes` columns then supply the single effect and duration, and the
//! `min_*` columns are ignored.
//!
//! Malformed pairs and unknown plane names are load errors; the loader never
//! substitutes defaults.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lp_core::{
    ActivityId, CoreError, CoreResult, Effect, EffectProfile, Minutes, PlaneRegistry,
    ProgressState,
};

use crate::catalog::ActivityCatalog;
use crate::definition::ActivityDefinition;
use crate::error::CatalogError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CatalogRecord {
    name:            String,
    precondition:    String,
    min_effect:      String,
    min_minutes:     String,
    max_effect:      String,
    max_minutes:     u32,
    default_minutes: String,
    max_repetitions: u32,
    plane:           String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an [`ActivityCatalog`] from a CSV file.
pub fn load_catalog_csv(path: &Path, planes: &PlaneRegistry) -> Result<ActivityCatalog, CatalogError> {
    let file = std::fs::File::open(path).map_err(CatalogError::Io)?;
    load_catalog_reader(file, planes)
}

/// Like [`load_catalog_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded fixtures.
pub fn load_catalog_reader<R: Read>(
    reader: R,
    planes: &PlaneRegistry,
) -> Result<ActivityCatalog, CatalogError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut definitions = Vec::new();

    for (i, result) in csv_reader.deserialize::<CatalogRecord>().enumerate() {
        let row = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
        definitions.push(definition_from_row(row, i, planes)?);
    }

    ActivityCatalog::new(definitions)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn definition_from_row(
    row: CatalogRecord,
    index: usize,
    planes: &PlaneRegistry,
) -> Result<ActivityDefinition, CatalogError> {
    let precondition = parse_state(&row.precondition)?;
    let max_effect = parse_effect(&row.max_effect)?;
    let max_minutes = Minutes(row.max_minutes);

    let adjustable = !row.default_minutes.trim().is_empty();
    let (profile, min_minutes, default_minutes) = if adjustable {
        let min_effect = parse_effect(&row.min_effect)?;
        let min_minutes = parse_minutes(&row.min_minutes, &row.name)?;
        let default_minutes = parse_minutes(&row.default_minutes, &row.name)?;
        let profile = EffectProfile {
            low: min_effect,
            high: max_effect,
            low_minutes: min_minutes,
            high_minutes: max_minutes,
        };
        (profile, min_minutes, default_minutes)
    } else {
        // Fixed duration: min = default = max, single effect.
        (EffectProfile::fixed(max_effect, max_minutes), max_minutes, max_minutes)
    };

    let def = ActivityDefinition {
        id: ActivityId::try_from(index)
            .map_err(|_| CatalogError::Parse(format!("catalog row {index} overflows ActivityId")))?,
        name: row.name,
        precondition,
        profile,
        min_minutes,
        default_minutes,
        max_minutes,
        adjustable,
        max_repetitions: row.max_repetitions,
        plane: planes.index_of(&row.plane)?,
    };
    def.validate()?;
    Ok(def)
}

/// Parse a `"x;y"` pair into its two components.
fn parse_pair(s: &str) -> CoreResult<[f32; 2]> {
    let mut parts = s.trim().split(';');
    let mut next = || -> CoreResult<f32> {
        parts
            .next()
            .ok_or_else(|| CoreError::Parse(format!("expected \"x;y\" pair, got {s:?}")))?
            .trim()
            .parse::<f32>()
            .map_err(|_| CoreError::Parse(format!("invalid number in pair {s:?}")))
    };
    let pair = [next()?, next()?];
    if parts.next().is_some() {
        return Err(CoreError::Parse(format!("too many components in pair {s:?}")));
    }
    Ok(pair)
}

fn parse_state(s: &str) -> Result<ProgressState, CatalogError> {
    let [a, b] = parse_pair(s)?;
    Ok(ProgressState::new(a, b))
}

fn parse_effect(s: &str) -> Result<Effect, CatalogError> {
    let [a, b] = parse_pair(s)?;
    Ok(Effect::new(a, b))
}

fn parse_minutes(s: &str, name: &str) -> Result<Minutes, CatalogError> {
    s.trim()
        .parse::<u32>()
        .map(Minutes)
        .map_err(|_| CatalogError::Parse(format!("activity {name:?}: invalid minutes {s:?}")))
}
