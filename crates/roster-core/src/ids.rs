//! Time-based id generation.
//!
//! Ids are Unix-millisecond timestamps rendered as decimal strings. Two
//! records created within the same millisecond, or a clock that steps
//! backwards, must never produce a repeated id, so the generator never
//! hands out a value at or below the last one it saw.

use crate::error::{CoreError, Result};
use crate::types::EmployeeId;

/// Numeric ids above this are not treated as timestamps.
///
/// A stored id near `u64::MAX` would otherwise pin the generator at the top
/// of its range. Such ids are handled like non-numeric ones: they never seed
/// the generator and only collide if it actually reaches them.
pub const MAX_OBSERVED_MILLIS: u64 = u64::MAX / 2;

/// A clock returning Unix time in milliseconds.
pub type Clock = fn() -> u64;

/// Monotonic millisecond id source.
#[derive(Debug, Clone)]
pub struct MonotonicIds {
    last: u64,
    clock: Clock,
}

impl MonotonicIds {
    /// Create a generator driven by the system clock.
    pub fn new() -> Self {
        Self::with_clock(now_millis)
    }

    /// Create a generator driven by a custom clock.
    pub fn with_clock(clock: Clock) -> Self {
        Self { last: 0, clock }
    }

    /// Record an existing id so later ids are issued strictly after it.
    ///
    /// Non-numeric ids, and numeric ids above [`MAX_OBSERVED_MILLIS`], are
    /// ignored.
    pub fn observe(&mut self, id: &EmployeeId) {
        if let Some(ms) = id.as_millis().filter(|ms| *ms <= MAX_OBSERVED_MILLIS) {
            self.last = self.last.max(ms);
        }
    }

    /// Issue the next id: `max(now, last + 1)`.
    ///
    /// Fails once `last` is `u64::MAX` and no larger value exists.
    pub fn next_id(&mut self) -> Result<EmployeeId> {
        let bumped = self
            .last
            .checked_add(1)
            .ok_or(CoreError::IdsExhausted(self.last))?;
        let next = (self.clock)().max(bumped);
        self.last = next;
        Ok(EmployeeId::from_millis(next))
    }

    /// The highest value issued or observed so far.
    pub fn last(&self) -> u64 {
        self.last
    }
}

impl Default for MonotonicIds {
    fn default() -> Self {
        Self::new()
    }
}

/// Get current time in milliseconds.
pub fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
