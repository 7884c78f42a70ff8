//! Learner progress space.
//!
//! A `ProgressState` is a point in the bounded square `[0, 1]²` — one
//! coordinate per tracked proficiency dimension.  `f32` gives ~7 significant
//! digits, far beyond what a pedagogical model can distinguish, while keeping
//! the type `Copy` and cache-friendly.
//!
//! # Directionality
//!
//! The only distance the engine ever needs is the *forward* distance: how
//! much unmet advancement separates one state from another.  Progress already
//! achieved beyond the target counts for nothing, so the measure is
//! asymmetric and deliberately not a metric:
//!
//! ```text
//! forward_distance(a, b) = Σ_i max(0, b_i − a_i)
//! ```

use std::fmt;

/// Number of tracked proficiency dimensions.
pub const DIMS: usize = 2;

// ── ProgressState ─────────────────────────────────────────────────────────────

/// A learner's position in the bounded progress space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressState {
    pub dims: [f32; DIMS],
}

impl ProgressState {
    /// Origin — a learner with no recorded progress.
    pub const ZERO: ProgressState = ProgressState { dims: [0.0; DIMS] };

    #[inline]
    pub fn new(a: f32, b: f32) -> Self {
        Self { dims: [a, b] }
    }

    /// Forward-only distance from `self` to `to`.
    ///
    /// Sums the per-dimension shortfall; dimensions where `self` already
    /// meets or exceeds `to` contribute zero.  Always `>= 0`.
    pub fn forward_distance(self, to: ProgressState) -> f32 {
        self.dims
            .iter()
            .zip(to.dims.iter())
            .map(|(a, b)| (b - a).max(0.0))
            .sum()
    }

    /// The state a learner must be lifted to before an activity with the
    /// given precondition can start.
    ///
    /// Raises each unmet dimension to the precondition; never lowers
    /// achieved progress.
    pub fn meet(self, precondition: ProgressState) -> ProgressState {
        let mut dims = self.dims;
        for (d, p) in dims.iter_mut().zip(precondition.dims.iter()) {
            *d = d.max(*p);
        }
        ProgressState { dims }
    }

    /// Apply an additive effect, clamping each dimension into `[0, 1]`.
    pub fn apply(self, effect: Effect) -> ProgressState {
        let mut dims = self.dims;
        for (d, e) in dims.iter_mut().zip(effect.delta.iter()) {
            *d = (*d + e).clamp(0.0, 1.0);
        }
        ProgressState { dims }
    }
}

impl fmt::Display for ProgressState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.dims[0], self.dims[1])
    }
}

// ── Effect ────────────────────────────────────────────────────────────────────

/// A per-dimension progress delta contributed by one activity.
///
/// Catalog convention keeps deltas non-negative (activities never regress a
/// learner); the type does not enforce this so custom models stay free to
/// experiment.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub delta: [f32; DIMS],
}

impl Effect {
    pub const NONE: Effect = Effect { delta: [0.0; DIMS] };

    #[inline]
    pub fn new(a: f32, b: f32) -> Self {
        Self { delta: [a, b] }
    }

    /// Component-wise linear interpolation between two effects.
    /// `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Effect, t: f32) -> Effect {
        let t = t.clamp(0.0, 1.0);
        let mut delta = [0.0; DIMS];
        for (i, d) in delta.iter_mut().enumerate() {
            *d = self.delta[i] + (other.delta[i] - self.delta[i]) * t;
        }
        Effect { delta }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+({:.2}, {:.2})", self.delta[0], self.delta[1])
    }
}
