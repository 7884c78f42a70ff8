//! Candidate scoring and the best-candidate tie-break.
//!
//! Two evaluation modes:
//!
//! - **Global** (no gap focused): availability flags only, all scores
//!   `None`, nothing recommended.  Used for an at-a-glance view of which
//!   activities are still usable.
//! - **Focused**: every catalog entry is scored against the boundaries of
//!   one gap, the `no_progress` flag is derived from the score's sign, and
//!   exactly one candidate is marked recommended.

use lp_catalog::{ActivityCatalog, ActivityDefinition};
use lp_core::{Minutes, ProgressState};

use crate::candidate::{CandidateFlags, CandidateScore};
use crate::efficiency::{EfficiencyInputs, EfficiencyModel};
use crate::error::{PlanError, PlanResult};

// ── Evaluation context ────────────────────────────────────────────────────────

/// Plan-side state the scorer needs, borrowed for one evaluation pass.
pub struct ScoreContext<'a> {
    pub catalog: &'a ActivityCatalog,
    /// Per-definition repetition counters, indexed by `ActivityId`.
    pub counters: &'a [u32],
    pub elapsed: Minutes,
    pub budget: Minutes,
    /// Sum of hard-gap distances across the whole plan.
    pub remaining_gap_distance: f32,
}

impl ScoreContext<'_> {
    /// Availability flags for one catalog entry (the `no_progress` flag is
    /// score-derived and filled in separately).
    fn flags_for(&self, def: &ActivityDefinition, index: usize) -> CandidateFlags {
        CandidateFlags {
            exhausted: self.counters[index] >= def.max_repetitions,
            too_long: self.budget < self.elapsed + def.default_minutes,
            no_progress: false,
        }
    }
}

// ── Evaluation ────────────────────────────────────────────────────────────────

/// Global (unfocused) evaluation: flags only, no scores, no recommendation.
pub fn evaluate_global(ctx: &ScoreContext<'_>) -> Vec<CandidateScore> {
    ctx.catalog
        .iter()
        .enumerate()
        .map(|(i, def)| CandidateScore::new(def.id, None, ctx.flags_for(def, i)))
        .collect()
}

/// Score every catalog entry against the interval `[from, to]` and mark the
/// single best candidate.
///
/// Fails with [`PlanError::EmptyCatalog`] when there is nothing to score —
/// the tie-break needs at least one candidate to seed its running best.
pub fn evaluate_for<E: EfficiencyModel>(
    ctx: &ScoreContext<'_>,
    from: ProgressState,
    to: ProgressState,
    model: &E,
) -> PlanResult<Vec<CandidateScore>> {
    if ctx.catalog.is_empty() {
        return Err(PlanError::EmptyCatalog);
    }

    let span = from.forward_distance(to);
    let remaining_budget = ctx.budget.saturating_sub(ctx.elapsed);

    let mut batch: Vec<CandidateScore> = Vec::with_capacity(ctx.catalog.len());
    for (i, def) in ctx.catalog.iter().enumerate() {
        let mut flags = ctx.flags_for(def, i);

        let (would_start, would_end) = def.resolve_default(from);
        let score = model.score(&EfficiencyInputs {
            span,
            setup: from.forward_distance(would_start),
            remaining: would_end.forward_distance(to),
            duration: def.default_minutes,
            remaining_budget,
            remaining_gap_distance: ctx.remaining_gap_distance,
        });
        if score <= 0.0 {
            flags.no_progress = true;
        }

        batch.push(CandidateScore::new(def.id, Some(score), flags));
    }

    mark_best(&mut batch);
    Ok(batch)
}

// ── Tie-break ─────────────────────────────────────────────────────────────────

/// Mark the single best candidate of `batch` as recommended.
///
/// A single left-to-right scan.  The running best starts at the first
/// candidate; each candidate then either displaces it or is skipped:
///
/// 1. a takeable running best is never displaced by a non-takeable
///    candidate;
/// 2. otherwise the candidate wins if it is takeable and the running best
///    is not, or its cost-flag count is strictly lower, or the counts are
///    equal and its score is strictly greater.
///
/// First-seen wins whenever no strict-improvement clause fires, so the scan
/// is deterministic and stable on ties.  An empty batch is a no-op: there is
/// nothing to mark.
pub fn mark_best(batch: &mut [CandidateScore]) {
    if batch.is_empty() {
        return;
    }

    let mut best = 0usize;
    for i in 0..batch.len() {
        let (cand, running) = (&batch[i], &batch[best]);

        if running.takeable() && !cand.takeable() {
            continue;
        }
        if (cand.takeable() && !running.takeable())
            || cand.flags.count() < running.flags.count()
            || (cand.flags.count() == running.flags.count()
                && score_gt(cand.score, running.score))
        {
            best = i;
        }
    }

    batch[best].recommended = true;
}

/// `a > b` over optional scores; an absent score never wins.
fn score_gt(a: Option<f32>, b: Option<f32>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a > b,
        (Some(_), None) => true,
        _ => false,
    }
}
