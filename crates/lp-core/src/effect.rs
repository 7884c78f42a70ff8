//! Duration-dependent effect profiles.
//!
//! Most activities can run longer or shorter than their default; the progress
//! they grant scales with the time invested.  An `EffectProfile` captures the
//! effect at the two duration endpoints and interpolates linearly between
//! them.  Fixed-duration activities store equal endpoints, so interpolation
//! degenerates to a constant.

use crate::progress::Effect;
use crate::time::Minutes;

/// The effect of one activity as a function of its chosen duration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectProfile {
    /// Effect granted when the activity runs at `low_minutes`.
    pub low: Effect,
    /// Effect granted when the activity runs at `high_minutes`.
    pub high: Effect,
    pub low_minutes: Minutes,
    pub high_minutes: Minutes,
}

impl EffectProfile {
    /// Profile for a fixed-duration activity: one effect, one duration.
    pub fn fixed(effect: Effect, minutes: Minutes) -> Self {
        Self {
            low: effect,
            high: effect,
            low_minutes: minutes,
            high_minutes: minutes,
        }
    }

    /// Effect at an arbitrary duration.
    ///
    /// Durations outside `[low_minutes, high_minutes]` are clamped to the
    /// nearest endpoint; a degenerate (fixed) profile always returns `low`.
    pub fn at(&self, minutes: Minutes) -> Effect {
        if self.high_minutes <= self.low_minutes {
            return self.low;
        }
        let span = (self.high_minutes.0 - self.low_minutes.0) as f32;
        let t = (minutes.0.saturating_sub(self.low_minutes.0)) as f32 / span;
        self.low.lerp(self.high, t)
    }
}
