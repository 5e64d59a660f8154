//! Day / hour / live-timer breakdown of a remaining duration.
//!
//! Whole days and whole hours are fixed labels computed at refresh time.
//! The sub-hour remainder becomes a [`ChronometerAnchor`] that keeps
//! counting down against the monotonic clock between refreshes.

use std::time::Duration as StdDuration;

use chrono::Duration;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;

/// Remaining time split into display fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownBreakdown {
    pub days: i64,
    pub hours: i64,
    /// Whole seconds left within the current hour.
    pub sub_hour_seconds: i64,
}

impl CountdownBreakdown {
    pub fn from_remaining(remaining: Duration) -> Self {
        let total = remaining.num_seconds().max(0);
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            sub_hour_seconds: total % SECONDS_PER_HOUR,
        }
    }

    /// `"5d:"`, or `None` when less than a day is left.
    pub fn days_label(&self) -> Option<String> {
        (self.days > 0).then(|| format!("{}d:", self.days))
    }

    pub fn hours_label(&self) -> String {
        format!("{:02}h:", self.hours)
    }

    /// Anchor the sub-hour remainder to the monotonic clock reading taken at
    /// refresh time.
    pub fn anchor_at(&self, monotonic_now: StdDuration) -> ChronometerAnchor {
        ChronometerAnchor {
            base: monotonic_now + StdDuration::from_secs(self.sub_hour_seconds as u64),
        }
    }
}

/// A countdown timer expressed as "monotonic-now + remaining".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChronometerAnchor {
    /// Monotonic instant at which the timer reaches zero.
    pub base: StdDuration,
}

impl ChronometerAnchor {
    pub fn remaining_at(&self, monotonic_now: StdDuration) -> StdDuration {
        self.base.saturating_sub(monotonic_now)
    }

    /// `MM:SS` as of `monotonic_now`, stopping at `00:00`. Anchors built by
    /// [`CountdownBreakdown::anchor_at`] never hold a full hour.
    pub fn display_at(&self, monotonic_now: StdDuration) -> String {
        let secs = self.remaining_at(monotonic_now).as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}
