//! Next-refresh planning for the widget.
//!
//! Keeps one one-shot alarm armed for whichever comes first: the nearest
//! pending deadline or the periodic fallback refresh.

use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};

use crate::services::countdown::DeadlineSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeReason {
    /// A task deadline passes and its row must drop off.
    NextDeadline,
    /// Periodic fallback so fresh cache contents eventually show up.
    Periodic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPlan {
    pub wake_at: DateTime<Utc>,
    pub reason: WakeReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmOutcome {
    Armed(RefreshPlan),
    Unchanged(RefreshPlan),
    Cleared,
    Idle,
}

/// Decides when the widget next needs a refresh and keeps a single one-shot
/// alarm armed for it.
///
/// The alarm time is a lower bound: the host may batch or delay delivery,
/// so a refresh can land after the deadline it was armed for.
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    periodic_interval: Option<Duration>,
    armed: Option<RefreshPlan>,
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new(Some(Duration::minutes(30)))
    }
}

impl RefreshScheduler {
    pub fn new(periodic_interval: Option<Duration>) -> Self {
        Self {
            periodic_interval: periodic_interval.filter(|interval| *interval > Duration::zero()),
            armed: None,
        }
    }

    /// Builds a scheduler from the settings value, where 0 disables the
    /// periodic fallback.
    pub fn with_interval_minutes(minutes: u32) -> Self {
        Self::new(Some(Duration::minutes(i64::from(minutes))))
    }

    pub fn armed(&self) -> Option<RefreshPlan> {
        self.armed
    }

    pub fn plan(&self, snapshot: &DeadlineSnapshot<'_>, now: DateTime<Utc>) -> Option<RefreshPlan> {
        let deadline = snapshot.nearest(now).map(|task| RefreshPlan {
            wake_at: task.deadline,
            reason: WakeReason::NextDeadline,
        });
        let periodic = self.periodic_interval.map(|interval| RefreshPlan {
            wake_at: now + interval,
            reason: WakeReason::Periodic,
        });

        match (deadline, periodic) {
            (Some(deadline), Some(periodic)) if periodic.wake_at < deadline.wake_at => Some(periodic),
            (Some(deadline), _) => Some(deadline),
            (None, periodic) => periodic,
        }
    }

    /// Re-arm the one-shot alarm after a refresh. Calling this again with the
    /// same snapshot and instant leaves the alarm untouched.
    pub fn rearm(&mut self, snapshot: &DeadlineSnapshot<'_>, now: DateTime<Utc>) -> ArmOutcome {
        let next = self.plan(snapshot, now);
        let outcome = match (self.armed, next) {
            (Some(current), Some(plan)) if current == plan => ArmOutcome::Unchanged(plan),
            (_, Some(plan)) => ArmOutcome::Armed(plan),
            (Some(_), None) => ArmOutcome::Cleared,
            (None, None) => ArmOutcome::Idle,
        };

        match outcome {
            ArmOutcome::Armed(plan) => {
                log::info!(
                    "Next widget refresh at {} ({:?})",
                    plan.wake_at,
                    plan.reason
                );
            }
            ArmOutcome::Cleared => log::info!("No pending deadlines; refresh alarm cleared"),
            ArmOutcome::Unchanged(_) | ArmOutcome::Idle => {}
        }

        self.armed = next;
        outcome
    }

    /// Time to wait from `now` until the armed alarm fires. Overdue alarms
    /// report zero.
    pub fn next_due_in(&self, now: DateTime<Utc>) -> Option<StdDuration> {
        self.armed.map(|plan| {
            (plan.wake_at - now)
                .to_std()
                .unwrap_or_else(|_| StdDuration::from_secs(0))
        })
    }

    /// Whether the armed alarm has come due.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.armed.is_some_and(|plan| now >= plan.wake_at)
    }
}
