//! Deadline filtering and nearest-deadline selection.
//!
//! Everything here is a pure function of the task snapshot and the
//! evaluation instant; callers pass both in on every refresh.

use chrono::{DateTime, Duration, Utc};

use crate::models::task::{parse_deadline, TaskRecord};

/// A pending (not completed) task with its parsed deadline. Values returned
/// by [`filter_active`] and [`nearest_task`] always have the deadline ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveTask<'a> {
    pub record: &'a TaskRecord,
    pub deadline: DateTime<Utc>,
}

impl<'a> ActiveTask<'a> {
    pub fn name(&self) -> &'a str {
        &self.record.name
    }

    /// Time left until the deadline, as of `now`.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        remaining(self.deadline, now)
    }
}

/// Pending tasks of one snapshot with their deadlines parsed once.
///
/// A refresh builds one of these and runs every query against it, so each
/// record is parsed (and a malformed deadline reported) a single time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineSnapshot<'a> {
    pending: Vec<ActiveTask<'a>>,
    total: usize,
    malformed: usize,
}

impl<'a> DeadlineSnapshot<'a> {
    pub fn parse(tasks: &'a [TaskRecord]) -> Self {
        let mut malformed = 0;
        let pending = tasks
            .iter()
            .filter(|record| !record.is_completed)
            .map(|record| {
                let deadline = parse_deadline(&record.deadline).unwrap_or_else(|| {
                    malformed += 1;
                    log::warn!(
                        "Unparsable deadline {:?} for task {:?}; treating as expired",
                        record.deadline,
                        record.name
                    );
                    DateTime::<Utc>::UNIX_EPOCH
                });
                ActiveTask { record, deadline }
            })
            .collect();

        Self {
            pending,
            total: tasks.len(),
            malformed,
        }
    }

    /// Number of pending records whose deadline failed to parse.
    pub fn malformed(&self) -> usize {
        self.malformed
    }

    /// Keep the tasks that are still ahead of `now`, in their original order.
    pub fn active(&self, now: DateTime<Utc>) -> Vec<ActiveTask<'a>> {
        let active: Vec<_> = self
            .pending
            .iter()
            .copied()
            .filter(|task| task.deadline > now)
            .collect();

        log::debug!(
            "{} of {} cached tasks are active at {}",
            active.len(),
            self.total,
            now
        );
        active
    }

    /// The active task with the earliest deadline. Ties go to the task
    /// listed first.
    pub fn nearest(&self, now: DateTime<Utc>) -> Option<ActiveTask<'a>> {
        self.pending
            .iter()
            .copied()
            .filter(|task| task.deadline > now)
            .min_by_key(|task| task.deadline)
    }

    /// The pending task whose deadline passed most recently, if any.
    pub fn latest_expired(&self, now: DateTime<Utc>) -> Option<ActiveTask<'a>> {
        self.pending
            .iter()
            .copied()
            .filter(|task| task.deadline <= now)
            .max_by_key(|task| task.deadline)
    }
}

/// Keep the tasks that are still pending, in their original order.
pub fn filter_active(tasks: &[TaskRecord], now: DateTime<Utc>) -> Vec<ActiveTask<'_>> {
    DeadlineSnapshot::parse(tasks).active(now)
}

/// Time left until `deadline`, never negative.
pub fn remaining(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    (deadline - now).max(Duration::zero())
}

/// Earliest deadline still in the future, used to schedule the next refresh.
pub fn nearest_deadline(tasks: &[TaskRecord], now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    nearest_task(tasks, now).map(|task| task.deadline)
}

/// The active task with the earliest deadline. Ties go to the task listed
/// first.
pub fn nearest_task(tasks: &[TaskRecord], now: DateTime<Utc>) -> Option<ActiveTask<'_>> {
    DeadlineSnapshot::parse(tasks).nearest(now)
}

/// The pending task whose deadline passed most recently, if any.
pub fn latest_expired(tasks: &[TaskRecord], now: DateTime<Utc>) -> Option<ActiveTask<'_>> {
    DeadlineSnapshot::parse(tasks).latest_expired(now)
}
