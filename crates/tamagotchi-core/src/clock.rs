//! Time sources for drivers.
//!
//! The pet state machine never reads a clock; drivers ask a [`Clock`] for
//! the current time and pass it in. [`SystemClock`] reads wall time,
//! [`ManualClock`] is set by hand for deterministic runs.

use std::cell::Cell;
use std::rc::Rc;

use chrono::Utc;

/// A source of the current time, in whole seconds.
pub trait Clock {
    /// Current time in seconds.
    fn now(&self) -> u64;
}

/// Wall-clock time: seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a system clock.
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        // Timestamps before 1970 cannot occur on a sane host; treat as zero.
        u64::try_from(Utc::now().timestamp()).unwrap_or(0)
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can hand one clone to the driver
/// loop and advance another from a scripted input source.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Create a clock reading `start`.
    pub fn new(start: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// Jump to `now`.
    pub fn set(&self, now: u64) {
        self.now.set(now);
    }

    /// Move forward by `secs`, saturating at `u64::MAX`.
    pub fn advance(&self, secs: u64) -> u64 {
        let next = self.now.get().saturating_add(secs);
        self.now.set(next);
        next
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.now.get()
    }
}
