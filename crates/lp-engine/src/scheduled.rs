//! One catalog entry bound into a plan.

use lp_catalog::ActivityDefinition;
use lp_core::{ActivityId, Minutes, ProgressState};

/// An activity placed at a specific position in the plan sequence.
///
/// The resolved fields (`start`, `end`, `starts_after`) are derived state:
/// they are set on creation and *recomputed in place* by the plan's
/// restructure pass after every mutation.  The entry itself is never
/// recreated, so its identity survives exchanges.
///
/// `duration` is sticky: once chosen (default on insertion, or overridden via
/// `Plan::set_duration`), restructuring re-resolves the start/end states at
/// that same duration.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledActivity {
    pub definition_id: ActivityId,

    /// Arrival state lifted to the definition's precondition.
    pub start: ProgressState,
    /// `start` plus the effect profile evaluated at `duration`.
    pub end: ProgressState,

    pub duration: Minutes,

    /// Cumulative duration of all prior entries.
    pub starts_after: Minutes,
}

impl ScheduledActivity {
    /// Bind `definition` into a plan arriving at `arrival`, at the default
    /// duration.  `starts_after` is left at zero; the restructure pass that
    /// follows every insertion assigns the real offset.
    pub fn new(definition: &ActivityDefinition, arrival: ProgressState) -> Self {
        let (start, end) = definition.resolve_default(arrival);
        Self {
            definition_id: definition.id,
            start,
            end,
            duration: definition.default_minutes,
            starts_after: Minutes::ZERO,
        }
    }

    /// Re-resolve the start/end states for a (possibly shifted) arrival
    /// state, keeping the stored duration.
    pub fn readjust(&mut self, definition: &ActivityDefinition, arrival: ProgressState) {
        let (start, end) = definition.resolve_from(arrival, self.duration);
        self.start = start;
        self.end = end;
    }
}
