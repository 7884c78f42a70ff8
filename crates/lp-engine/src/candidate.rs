//! Candidate evaluation results.

use lp_core::ActivityId;

// ── CandidateFlags ────────────────────────────────────────────────────────────

/// Advisory flags attached to one candidate evaluation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct CandidateFlags {
    /// The definition's repetition cap is already reached.
    pub exhausted: bool,
    /// The default duration would overflow the remaining time budget.
    pub too_long: bool,
    /// A score was computed but came out non-positive.
    pub no_progress: bool,
}

impl CandidateFlags {
    /// Number of *cost* flags set.  `no_progress` is deliberately excluded:
    /// the tie-break treats it as a hard disqualifier, not a counted cost.
    pub fn count(self) -> u32 {
        self.exhausted as u32 + self.too_long as u32
    }
}

// ── CandidateScore ────────────────────────────────────────────────────────────

/// One catalog entry evaluated against a specific gap (or globally).
///
/// Created fresh on every (re-)evaluation and never mutated afterward,
/// except for `recommended`, which the selector sets on exactly one entry
/// per focused batch.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateScore {
    pub definition_id: ActivityId,

    /// Efficiency score.  `None` in global (unfocused) evaluation, where
    /// only availability flags are computed.
    pub score: Option<f32>,

    pub flags: CandidateFlags,

    /// Marked by the selector on the single best candidate of a batch.
    pub recommended: bool,
}

impl CandidateScore {
    pub fn new(definition_id: ActivityId, score: Option<f32>, flags: CandidateFlags) -> Self {
        Self {
            definition_id,
            score,
            flags,
            recommended: false,
        }
    }

    /// A candidate is takeable unless it makes no progress at all.
    pub fn takeable(&self) -> bool {
        !self.flags.no_progress
    }
}
