//! Plan time model.
//!
//! All plan arithmetic is whole minutes held in a `Minutes` newtype.  Using
//! an integer as the canonical unit means offsets, budgets, and elapsed-time
//! sums are exact (no floating-point drift) and comparisons are O(1) —
//! lesson budgets are minutes-granular in practice anyway.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A non-negative span of plan time, in whole minutes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minutes(pub u32);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0);

    /// Span remaining after spending `spent`, floored at zero.
    #[inline]
    pub fn saturating_sub(self, spent: Minutes) -> Minutes {
        Minutes(self.0.saturating_sub(spent.0))
    }

    /// Minutes as `f32`, for ratio-style scoring arithmetic.
    #[inline]
    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }
}

impl Add for Minutes {
    type Output = Minutes;
    #[inline]
    fn add(self, rhs: Minutes) -> Minutes {
        Minutes(self.0 + rhs.0)
    }
}

impl AddAssign for Minutes {
    #[inline]
    fn add_assign(&mut self, rhs: Minutes) {
        self.0 += rhs.0;
    }
}

impl Sum for Minutes {
    fn sum<I: Iterator<Item = Minutes>>(iter: I) -> Minutes {
        iter.fold(Minutes::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'", self.0)
    }
}
