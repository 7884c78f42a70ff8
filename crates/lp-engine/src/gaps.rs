//! Gap analysis: which transitions of a plan are under-covered.
//!
//! A plan with `n` scheduled activities has `n + 1` transitions: before the
//! first entry, between each consecutive pair, and after the last entry to
//! the goal.  Each transition is measured by the forward distance between
//! the state reached at that point and the state required at the next point.
//! A transition whose distance *strictly* exceeds the threshold is a hard
//! gap.
//!
//! Analysis is a pure O(n) pass; the plan re-runs it after every mutation.

use lp_core::ProgressState;

use crate::scheduled::ScheduledActivity;

// ── GapMeasure ────────────────────────────────────────────────────────────────

/// One hard transition: its position and forward distance.
///
/// `index` is the position *before which* the gap sits — 0 means "before the
/// first activity", `sequence.len()` means "between the last activity and
/// the goal".
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GapMeasure {
    pub index: usize,
    pub distance: f32,
}

// ── GapReport ─────────────────────────────────────────────────────────────────

/// The result of one gap-analysis pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GapReport {
    /// Hard gaps, ascending by index.
    pub hard: Vec<GapMeasure>,
    /// Sum of the hard gaps' distances.
    pub total_distance: f32,
}

impl GapReport {
    pub fn hard_indices(&self) -> Vec<usize> {
        self.hard.iter().map(|g| g.index).collect()
    }

    /// The hard gap with the largest distance.
    ///
    /// Ties are broken toward the **higher index**: `hard` is ascending, and
    /// a later gap displaces an earlier one of equal distance.
    pub fn worst(&self) -> Option<GapMeasure> {
        let mut worst: Option<GapMeasure> = None;
        for &gap in &self.hard {
            match worst {
                Some(w) if gap.distance < w.distance => {}
                _ => worst = Some(gap),
            }
        }
        worst
    }
}

// ── Analysis ──────────────────────────────────────────────────────────────────

/// Classify every transition of `sequence` between `start` and `goal`.
///
/// Pure: mutates nothing, reads only resolved entry states.  The caller is
/// responsible for the sequence being freshly restructured.
pub fn analyze(
    sequence: &[ScheduledActivity],
    start: ProgressState,
    goal: ProgressState,
    threshold: f32,
) -> GapReport {
    let mut report = GapReport::default();
    let mut current = start;

    for index in 0..=sequence.len() {
        let distance = match sequence.get(index) {
            Some(entry) => {
                let d = current.forward_distance(entry.start);
                current = entry.end;
                d
            }
            None => current.forward_distance(goal),
        };

        if distance > threshold {
            report.hard.push(GapMeasure { index, distance });
            report.total_distance += distance;
        }
    }

    report
}
