//! The `EfficiencyModel` trait — the engine's scoring extension point.

use lp_core::Minutes;

/// Everything a scoring model may consider for one candidate.
///
/// All distances are forward distances measured in the progress space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EfficiencyInputs {
    /// The focused gap's own span: from-boundary → to-boundary.
    pub span: f32,
    /// Setup cost: from-boundary → the state the candidate would start at
    /// (how far above the gap the precondition sits).
    pub setup: f32,
    /// What would still be left: candidate end state → to-boundary.
    pub remaining: f32,
    /// The candidate's default duration.
    pub duration: Minutes,
    /// Budget minus the plan's elapsed time.
    pub remaining_budget: Minutes,
    /// Sum of all hard-gap distances across the whole plan.
    pub remaining_gap_distance: f32,
}

/// Pluggable candidate scoring.
///
/// # Contract
///
/// The engine relies on the **sign** only: a non-positive score means "no
/// net progress" (the candidate gets the `no_progress` flag and is never
/// preferred over a progressing one), a strictly positive score means
/// "helpful".  Magnitude must be a monotonic helpfulness ranking *within one
/// evaluation batch* — candidates of a batch are scored under the same call
/// context, so cross-batch magnitudes need not be comparable.
///
/// Implementations must be pure: the plan rescores after every mutation and
/// expects identical inputs to yield identical scores.
pub trait EfficiencyModel {
    fn score(&self, inputs: &EfficiencyInputs) -> f32;
}

/// Default model: net forward progress toward the gap per minute spent.
///
/// ```text
/// score = (span − remaining − setup) / duration
/// ```
///
/// `span − remaining` is how much closer the gap's far boundary got; the
/// setup distance is charged back because a precondition sitting above the
/// gap start means the learner is not actually ready for the candidate.
/// Budget pressure is handled by the `too_long` flag rather than the score,
/// so the two spare inputs go unused here; custom models get them anyway.
#[derive(Copy, Clone, Debug, Default)]
pub struct NetGainPerMinute;

impl EfficiencyModel for NetGainPerMinute {
    fn score(&self, inputs: &EfficiencyInputs) -> f32 {
        let net = (inputs.span - inputs.remaining) - inputs.setup;
        net / inputs.duration.as_f32().max(1.0)
    }
}
