//! `Plan` — the orchestration engine proper.
//!
//! A `Plan` owns the ordered sequence of scheduled activities, the
//! per-definition repetition counters, and all derived state (elapsed time,
//! reached state, hard-gap list, candidate batch).  Mutations validate,
//! splice, then [restructure](Plan::restructure); derived state is never
//! read stale.
//!
//! # Invariants (hold after every public operation)
//!
//! - `total_time == Σ entry.duration`
//! - `counters[i] == |{ entry : entry.definition_id == i }|`
//! - `reached` is the end state of the last entry (or `start` when empty)
//! - `focus`, when set, is within `0..=sequence.len()`
//! - `candidates` is the batch for the current focus and plan state

use std::sync::Arc;

use lp_catalog::ActivityCatalog;
use lp_core::{ActivityId, Minutes, ProgressState};

use crate::candidate::CandidateScore;
use crate::efficiency::EfficiencyModel;
use crate::error::{PlanError, PlanResult};
use crate::gaps::{self, GapReport};
use crate::scheduled::ScheduledActivity;
use crate::selector::{self, ScoreContext};

/// Hard-gap distance threshold used when the builder is not given one.
pub const DEFAULT_HARD_GAP_THRESHOLD: f32 = 0.1;

/// A lesson plan under construction: sequence, counters, and derived state.
///
/// Generic over the [`EfficiencyModel`] used for candidate scoring.  The
/// catalog is shared read-only; the plan exclusively owns everything else.
pub struct Plan<E: EfficiencyModel> {
    pub(crate) catalog: Arc<ActivityCatalog>,
    pub(crate) efficiency: E,

    pub(crate) time_budget: Minutes,
    pub(crate) hard_gap_threshold: f32,
    pub(crate) start: ProgressState,
    pub(crate) goal: ProgressState,

    pub(crate) sequence: Vec<ScheduledActivity>,
    pub(crate) counters: Vec<u32>,

    // Derived, rebuilt by restructure():
    pub(crate) reached: ProgressState,
    pub(crate) total_time: Minutes,
    pub(crate) gap_report: GapReport,
    pub(crate) focus: Option<usize>,
    pub(crate) candidates: Vec<CandidateScore>,
}

impl<E: EfficiencyModel> Plan<E> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &ActivityCatalog {
        &self.catalog
    }

    pub fn time_budget(&self) -> Minutes {
        self.time_budget
    }

    pub fn hard_gap_threshold(&self) -> f32 {
        self.hard_gap_threshold
    }

    pub fn total_time(&self) -> Minutes {
        self.total_time
    }

    pub fn remaining_budget(&self) -> Minutes {
        self.time_budget.saturating_sub(self.total_time)
    }

    pub fn start(&self) -> ProgressState {
        self.start
    }

    pub fn goal(&self) -> ProgressState {
        self.goal
    }

    /// The state after the last scheduled activity (`start` when empty).
    pub fn reached(&self) -> ProgressState {
        self.reached
    }

    pub fn sequence(&self) -> &[ScheduledActivity] {
        &self.sequence
    }

    /// Per-definition repetition counters, indexed by `ActivityId`.
    pub fn counters(&self) -> &[u32] {
        &self.counters
    }

    pub fn hard_gap_indices(&self) -> Vec<usize> {
        self.gap_report.hard_indices()
    }

    pub fn hard_gap_count(&self) -> usize {
        self.gap_report.hard.len()
    }

    pub fn remaining_gap_distance(&self) -> f32 {
        self.gap_report.total_distance
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Whether the focused gap is one of the hard ones.
    pub fn is_focused_gap_hard(&self) -> bool {
        match self.focus {
            Some(g) => self.gap_report.hard.iter().any(|m| m.index == g),
            None => false,
        }
    }

    /// The candidate batch for the current focus (global flags-only batch
    /// when unfocused).
    pub fn candidates(&self) -> &[CandidateScore] {
        &self.candidates
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Insert `definition_id` at `position` (0 = before the first entry,
    /// `sequence.len()` = after the last).
    pub fn insert(&mut self, definition_id: ActivityId, position: usize) -> PlanResult<()> {
        let def = self
            .catalog
            .get(definition_id)
            .ok_or(PlanError::UnknownDefinition(definition_id))?;
        if position > self.sequence.len() {
            return Err(PlanError::InvalidIndex {
                index: position,
                len: self.sequence.len(),
            });
        }

        let arrival = self.arrival_at(position);
        let entry = ScheduledActivity::new(def, arrival);
        self.counters[definition_id.index()] += 1;
        self.sequence.insert(position, entry);
        self.restructure()
    }

    /// Move the entry at `from_index` to slot `to_slot`.
    ///
    /// `to_slot` addresses a slot of the *original* sequence; when it lies
    /// after the removed position it is shifted down by one, since removal
    /// moves later slots down.  The entry keeps its identity — only its
    /// resolved fields change, via restructure.
    pub fn exchange(&mut self, from_index: usize, to_slot: usize) -> PlanResult<()> {
        let len = self.sequence.len();
        if from_index >= len {
            return Err(PlanError::InvalidIndex { index: from_index, len });
        }
        if to_slot > len {
            return Err(PlanError::InvalidIndex { index: to_slot, len });
        }

        let moving = self.sequence.remove(from_index);
        let to_slot = if to_slot > from_index { to_slot - 1 } else { to_slot };
        self.sequence.insert(to_slot, moving);
        self.restructure()
    }

    /// Delete the entry at `index`.
    ///
    /// A focus sitting past the shortened sequence is clamped to the final
    /// gap so it stays a valid transition.
    pub fn remove(&mut self, index: usize) -> PlanResult<()> {
        let len = self.sequence.len();
        if index >= len {
            return Err(PlanError::InvalidIndex { index, len });
        }

        let entry = self.sequence.remove(index);
        self.counters[entry.definition_id.index()] -= 1;
        if let Some(f) = self.focus {
            self.focus = Some(f.min(self.sequence.len()));
        }
        self.restructure()
    }

    /// Clear the sequence and all repetition counters.
    pub fn reset(&mut self) -> PlanResult<()> {
        self.sequence.clear();
        self.counters.iter_mut().for_each(|c| *c = 0);
        if self.focus.is_some() {
            self.focus = Some(0);
        }
        self.restructure()
    }

    /// Override the duration of the entry at `index`.
    ///
    /// Only adjustable activities accept this; the new duration must lie in
    /// the definition's `[min, max]` range.
    pub fn set_duration(&mut self, index: usize, minutes: Minutes) -> PlanResult<()> {
        let len = self.sequence.len();
        let entry = self
            .sequence
            .get(index)
            .ok_or(PlanError::InvalidIndex { index, len })?;
        let def = self
            .catalog
            .get(entry.definition_id)
            .ok_or(PlanError::UnknownDefinition(entry.definition_id))?;

        if !def.adjustable {
            return Err(PlanError::DurationFixed(def.id));
        }
        if minutes < def.min_minutes || minutes > def.max_minutes {
            return Err(PlanError::DurationOutOfRange {
                id: def.id,
                requested: minutes,
                min: def.min_minutes,
                max: def.max_minutes,
            });
        }

        self.sequence[index].duration = minutes;
        self.restructure()
    }

    // ── Focus & auto-fill ─────────────────────────────────────────────────

    /// Switch between global scoring (`None`) and interval scoring for one
    /// gap, re-evaluating the candidate batch either way.
    pub fn set_focus(&mut self, focus: Option<usize>) -> PlanResult<()> {
        if let Some(g) = focus {
            if g > self.sequence.len() {
                return Err(PlanError::InvalidIndex {
                    index: g,
                    len: self.sequence.len(),
                });
            }
            if self.catalog.is_empty() {
                return Err(PlanError::EmptyCatalog);
            }
        }
        self.focus = focus;
        self.reevaluate()
    }

    /// Focus the hard gap with the largest distance (ties toward the higher
    /// index, see [`GapReport::worst`]) and fill it with the recommended
    /// candidate.
    pub fn auto_fill_worst_gap(&mut self) -> PlanResult<()> {
        let worst = self.gap_report.worst().ok_or(PlanError::NoHardGap)?;
        self.set_focus(Some(worst.index))?;
        self.auto_fill_focused_gap()
    }

    /// Insert the currently recommended candidate at the focused gap.
    pub fn auto_fill_focused_gap(&mut self) -> PlanResult<()> {
        let gap = self.focus.ok_or(PlanError::NoFocus)?;
        let definition_id = self
            .candidates
            .iter()
            .find(|c| c.recommended)
            .map(|c| c.definition_id)
            .ok_or(PlanError::NoRecommendation)?;
        self.insert(definition_id, gap)
    }

    // ── Restructuring ─────────────────────────────────────────────────────

    /// Replay the sequence from the plan's start state, rebuilding every
    /// derived field, then re-run gap analysis and candidate scoring.
    ///
    /// Idempotent: a second call with no intervening mutation reproduces
    /// identical derived state.
    pub(crate) fn restructure(&mut self) -> PlanResult<()> {
        let catalog = Arc::clone(&self.catalog);
        let mut current = self.start;
        let mut elapsed = Minutes::ZERO;

        for entry in &mut self.sequence {
            let def = catalog
                .get(entry.definition_id)
                .ok_or(PlanError::UnknownDefinition(entry.definition_id))?;
            entry.starts_after = elapsed;
            elapsed += entry.duration;
            entry.readjust(def, current);
            current = entry.end;
        }

        self.total_time = elapsed;
        self.reached = current;
        self.gap_report =
            gaps::analyze(&self.sequence, self.start, self.goal, self.hard_gap_threshold);
        self.reevaluate()
    }

    /// Rebuild the candidate batch for the current focus.
    fn reevaluate(&mut self) -> PlanResult<()> {
        let ctx = ScoreContext {
            catalog: &self.catalog,
            counters: &self.counters,
            elapsed: self.total_time,
            budget: self.time_budget,
            remaining_gap_distance: self.gap_report.total_distance,
        };
        self.candidates = match self.focus {
            None => selector::evaluate_global(&ctx),
            Some(gap) => {
                let (from, to) = self.gap_bounds(gap);
                selector::evaluate_for(&ctx, from, to, &self.efficiency)?
            }
        };
        Ok(())
    }

    // ── Private helpers ───────────────────────────────────────────────────

    /// State reached just before `position` (the predecessor's end, or the
    /// plan start for position 0).
    fn arrival_at(&self, position: usize) -> ProgressState {
        if position == 0 {
            self.start
        } else {
            self.sequence[position - 1].end
        }
    }

    /// Boundary states of gap `gap`: the state reached before it and the
    /// state required after it (goal for the final gap).
    fn gap_bounds(&self, gap: usize) -> (ProgressState, ProgressState) {
        let from = self.arrival_at(gap);
        let to = match self.sequence.get(gap) {
            Some(entry) => entry.start,
            None => self.goal,
        };
        (from, to)
    }
}
