// Property-based tests for the countdown calculator
// Random task lists checked against the active-set rules

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use deadline_dash::models::task::{format_deadline, TaskRecord};
use deadline_dash::services::countdown::{filter_active, nearest_deadline, remaining};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap()
}

/// A task whose deadline lies within ±60 days of `now()`, sometimes
/// completed, sometimes with an unparsable deadline.
fn task_strategy() -> impl Strategy<Value = TaskRecord> {
    (
        "[a-z]{1,8}",
        -60 * 86_400_000i64..60 * 86_400_000i64,
        any::<bool>(),
        prop::bool::weighted(0.1),
    )
        .prop_map(|(name, offset_ms, completed, garbled)| {
            let deadline = if garbled {
                "garbled".to_string()
            } else {
                format_deadline(now() + Duration::milliseconds(offset_ms))
            };
            TaskRecord {
                name,
                deadline,
                is_completed: completed,
            }
        })
}

proptest! {
    /// Property: completed tasks never show up, whatever their deadline
    #[test]
    fn prop_completed_tasks_never_active(tasks in prop::collection::vec(task_strategy(), 0..20)) {
        let active = filter_active(&tasks, now());
        prop_assert!(active.iter().all(|task| !task.record.is_completed));
    }

    /// Property: every active task has a deadline strictly after now and a
    /// strictly positive remaining time
    #[test]
    fn prop_active_tasks_are_in_the_future(tasks in prop::collection::vec(task_strategy(), 0..20)) {
        for task in filter_active(&tasks, now()) {
            prop_assert!(task.deadline > now());
            prop_assert!(remaining(task.deadline, now()) > Duration::zero());
            prop_assert!(task.record.deadline != "garbled");
        }
    }

    /// Property: the active set is a subsequence of the input
    #[test]
    fn prop_active_set_keeps_source_order(tasks in prop::collection::vec(task_strategy(), 0..20)) {
        let active = filter_active(&tasks, now());
        let mut cursor = tasks.iter();
        for task in &active {
            prop_assert!(cursor.any(|candidate| std::ptr::eq(candidate, task.record)));
        }
    }

    /// Property: nearest_deadline is the minimum active deadline
    #[test]
    fn prop_nearest_is_minimum_active_deadline(tasks in prop::collection::vec(task_strategy(), 0..20)) {
        let expected = filter_active(&tasks, now()).iter().map(|task| task.deadline).min();
        prop_assert_eq!(nearest_deadline(&tasks, now()), expected);
    }

    /// Property: repeated evaluation gives the same answer
    #[test]
    fn prop_filter_is_idempotent(tasks in prop::collection::vec(task_strategy(), 0..20)) {
        prop_assert_eq!(filter_active(&tasks, now()), filter_active(&tasks, now()));
    }
}
