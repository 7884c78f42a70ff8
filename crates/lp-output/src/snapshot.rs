//! Round-trippable record of a plan's inputs.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use lp_catalog::ActivityCatalog;
use lp_core::{ActivityId, Minutes, ProgressState};
use lp_engine::{EfficiencyModel, Plan, PlanBuilder};

use crate::error::{OutputError, OutputResult};

/// One sequence entry as stored: which definition, at what duration.
///
/// The name is redundant with the id but stored anyway: it is what lets
/// [`PlanSnapshot::restore`] detect that the catalog changed underneath a
/// saved file instead of silently rebuilding a different lesson.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub definition_id: ActivityId,
    pub name: String,
    pub duration: Minutes,
}

/// Everything needed to rebuild a plan against a live catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub time_budget: Minutes,
    pub hard_gap_threshold: f32,
    pub start: ProgressState,
    pub goal: ProgressState,
    pub focus: Option<usize>,
    pub entries: Vec<SnapshotEntry>,
}

impl PlanSnapshot {
    /// Capture the inputs of `plan`.
    pub fn of<E: EfficiencyModel>(plan: &Plan<E>) -> Self {
        let entries = plan
            .sequence()
            .iter()
            .map(|entry| {
                // Sequence entries always reference live definitions.
                let def = plan
                    .catalog()
                    .get(entry.definition_id)
                    .expect("sequence entry references a live catalog definition");
                SnapshotEntry {
                    definition_id: entry.definition_id,
                    name: def.name.clone(),
                    duration: entry.duration,
                }
            })
            .collect();

        Self {
            time_budget: plan.time_budget(),
            hard_gap_threshold: plan.hard_gap_threshold(),
            start: plan.start(),
            goal: plan.goal(),
            focus: plan.focus(),
            entries,
        }
    }

    /// Rebuild a plan by replaying this snapshot against `catalog`.
    ///
    /// Fails with [`OutputError::Mismatch`] when a stored entry's id is gone
    /// or its name disagrees with the catalog definition at that id.
    /// Engine-side failures (out-of-range or fixed durations, bad focus)
    /// surface as [`OutputError::Plan`].
    pub fn restore<E: EfficiencyModel>(
        &self,
        catalog: Arc<ActivityCatalog>,
        efficiency: E,
    ) -> OutputResult<Plan<E>> {
        let mut plan = PlanBuilder::new(catalog, self.start, self.goal, self.time_budget)
            .hard_gap_threshold(self.hard_gap_threshold)
            .efficiency(efficiency)
            .build()?;

        for (position, stored) in self.entries.iter().enumerate() {
            let def = plan
                .catalog()
                .get(stored.definition_id)
                .ok_or_else(|| {
                    OutputError::Mismatch(format!(
                        "stored entry {:?} ({}) is absent from the catalog",
                        stored.name, stored.definition_id
                    ))
                })?;
            if def.name != stored.name {
                return Err(OutputError::Mismatch(format!(
                    "catalog drift: {} is now {:?}, snapshot says {:?}",
                    stored.definition_id, def.name, stored.name
                )));
            }
            let default_duration = def.default_minutes;

            plan.insert(stored.definition_id, position)?;
            if stored.duration != default_duration {
                plan.set_duration(position, stored.duration)?;
            }
        }

        plan.set_focus(self.focus)?;
        Ok(plan)
    }
}
