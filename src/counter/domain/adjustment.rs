//! Saturating counter arithmetic.

use serde::{Deserialize, Serialize};

/// The outcome of applying a signed delta to a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterAdjustment {
    previous: u64,
    value: u64,
    clamped: bool,
}

impl CounterAdjustment {
    /// Returns the counter value before the adjustment.
    #[must_use]
    pub const fn previous(self) -> u64 {
        self.previous
    }

    /// Returns the counter value after the adjustment.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.value
    }

    /// Returns whether the adjustment was clamped at a bound instead of
    /// applying the full delta.
    #[must_use]
    pub const fn clamped(self) -> bool {
        self.clamped
    }
}

/// Applies a signed delta to a non-negative counter value.
///
/// Decrements past zero clamp to zero and increments past `u64::MAX`
/// clamp to the maximum; either case is reported through
/// [`CounterAdjustment::clamped`] so the caller can record the
/// inconsistency.
#[must_use]
pub const fn saturating_apply(current: u64, delta: i64) -> CounterAdjustment {
    let magnitude = delta.unsigned_abs();
    let value = if delta >= 0 {
        current.saturating_add(magnitude)
    } else {
        current.saturating_sub(magnitude)
    };
    let applied = if delta >= 0 {
        value - current
    } else {
        current - value
    };
    CounterAdjustment {
        previous: current,
        value,
        clamped: applied != magnitude,
    }
}
