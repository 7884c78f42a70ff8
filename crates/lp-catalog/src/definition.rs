//! One immutable activity definition.

use lp_core::{ActivityId, EffectProfile, Minutes, PlaneId, ProgressState};

use crate::error::{CatalogError, CatalogResult};

/// A catalog entry: everything the engine needs to know about one activity.
///
/// Immutable once loaded.  Durations satisfy `min <= default <= max`; for
/// non-adjustable activities all three are equal (checked by
/// [`ActivityDefinition::validate`], which the loader and catalog builder
/// always run).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityDefinition {
    /// Index of this definition in its catalog.
    pub id: ActivityId,
    pub name: String,

    /// Minimum progress state a learner must hold before starting.
    pub precondition: ProgressState,

    /// Progress granted, as a function of the chosen duration.
    pub profile: EffectProfile,

    pub min_minutes: Minutes,
    pub default_minutes: Minutes,
    pub max_minutes: Minutes,

    /// Whether the duration may deviate from the default.
    pub adjustable: bool,

    /// How many times this activity may appear in one plan.
    pub max_repetitions: u32,

    /// The social plane this activity primarily targets.
    pub plane: PlaneId,
}

impl ActivityDefinition {
    /// Check the duration invariant.
    pub fn validate(&self) -> CatalogResult<()> {
        let ordered = self.min_minutes <= self.default_minutes
            && self.default_minutes <= self.max_minutes;
        let fixed_ok = self.adjustable
            || (self.min_minutes == self.max_minutes && self.min_minutes == self.default_minutes);
        if ordered && fixed_ok {
            Ok(())
        } else {
            Err(CatalogError::InvalidDurations {
                name: self.name.clone(),
                min: self.min_minutes,
                default: self.default_minutes,
                max: self.max_minutes,
                adjustable: self.adjustable,
            })
        }
    }

    /// Resolve what this activity does when started from `arrival` with the
    /// given duration: the (lifted) start state and the resulting end state.
    pub fn resolve_from(
        &self,
        arrival: ProgressState,
        minutes: Minutes,
    ) -> (ProgressState, ProgressState) {
        let start = arrival.meet(self.precondition);
        let end = start.apply(self.profile.at(minutes));
        (start, end)
    }

    /// [`resolve_from`](Self::resolve_from) at the default duration.
    pub fn resolve_default(&self, arrival: ProgressState) -> (ProgressState, ProgressState) {
        self.resolve_from(arrival, self.default_minutes)
    }
}
