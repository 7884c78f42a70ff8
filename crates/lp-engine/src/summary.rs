//! Serializable views of a plan and its candidate batch.
//!
//! These are the shapes handed to hosting layers (HTTP glue, exporters,
//! CLIs): plain data, resolved names, no engine internals.

use serde::{Deserialize, Serialize};

use lp_core::{Minutes, PlaneId};

use crate::candidate::CandidateFlags;
use crate::efficiency::EfficiencyModel;
use crate::plan::Plan;

// ── Views ─────────────────────────────────────────────────────────────────────

/// One scheduled entry, as seen from outside.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduledView {
    pub name: String,
    pub duration: Minutes,
    pub starts_after: Minutes,
    pub plane: PlaneId,
}

/// Snapshot of a plan's externally interesting derived state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub activities: Vec<ScheduledView>,
    pub total_time: Minutes,
    pub time_budget: Minutes,
    pub hard_gap_count: usize,
    pub hard_gap_indices: Vec<usize>,
    pub remaining_gap_distance: f32,
}

/// One candidate, as seen from outside.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateView {
    pub name: String,
    pub score: Option<f32>,
    pub flags: CandidateFlags,
    pub is_recommended: bool,
}

// ── Construction ──────────────────────────────────────────────────────────────

impl<E: EfficiencyModel> Plan<E> {
    /// Build the externally consumable summary of the current plan state.
    pub fn summary(&self) -> PlanSummary {
        let activities = self
            .sequence
            .iter()
            .map(|entry| {
                // Restructure keeps every entry backed by a live definition;
                // a miss here is an engine bug, never substituted away.
                let def = self
                    .catalog
                    .get(entry.definition_id)
                    .expect("sequence entry references a live catalog definition");
                ScheduledView {
                    name: def.name.clone(),
                    duration: entry.duration,
                    starts_after: entry.starts_after,
                    plane: def.plane,
                }
            })
            .collect();

        PlanSummary {
            activities,
            total_time: self.total_time,
            time_budget: self.time_budget,
            hard_gap_count: self.hard_gap_count(),
            hard_gap_indices: self.hard_gap_indices(),
            remaining_gap_distance: self.remaining_gap_distance(),
        }
    }

    /// The current candidate batch with names resolved.
    pub fn candidate_views(&self) -> Vec<CandidateView> {
        self.candidates
            .iter()
            .map(|c| {
                // Batches are built by iterating the catalog itself.
                let def = self
                    .catalog
                    .get(c.definition_id)
                    .expect("candidate references a live catalog definition");
                CandidateView {
                    name: def.name.clone(),
                    score: c.score,
                    flags: c.flags,
                    is_recommended: c.recommended,
                }
            })
            .collect()
    }
}
