//! Monotonic clock sources for live countdown anchors.
//!
//! Countdown timers are anchored to device uptime rather than wall-clock
//! time, so a display can keep ticking locally after a single refresh.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Uptime counter immune to wall-clock adjustments.
pub trait MonotonicClock {
    /// Time elapsed since the clock's origin.
    fn elapsed(&self) -> Duration;
}

/// Real uptime, measured from when the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct UptimeClock {
    origin: Instant,
}

impl UptimeClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for UptimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for UptimeClock {
    fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually driven clock for tests and previews.
#[derive(Debug, Default)]
pub struct FixedClock {
    now: Cell<Duration>,
}

impl FixedClock {
    pub fn at(now: Duration) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl MonotonicClock for FixedClock {
    fn elapsed(&self) -> Duration {
        self.now.get()
    }
}
