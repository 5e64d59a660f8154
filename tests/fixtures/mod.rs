// Test fixtures - reusable test data
// Provides consistent task lists across the integration tests

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use deadline_dash::models::task::TaskRecord;

/// Sample instants for testing
pub mod instants {
    use super::*;

    /// Jan 15, 2026 at midnight UTC, the evaluation instant of most scenarios
    pub fn jan_15_2026() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap()
    }

    /// Deadline of the rent task
    pub fn rent_due() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 20, 12, 0, 0).unwrap()
    }
}

/// Sample tasks for testing
pub mod tasks {
    use super::*;

    pub fn pay_rent() -> TaskRecord {
        TaskRecord::new("Pay rent", "2026-01-20T12:00:00.000Z")
    }

    pub fn paid_rent() -> TaskRecord {
        pay_rent().completed()
    }

    pub fn overdue_report() -> TaskRecord {
        TaskRecord::new("File report", "2026-01-10T00:00:00.000Z")
    }

    pub fn garbled() -> TaskRecord {
        TaskRecord::new("Garbled", "not-a-date")
    }

    pub fn dentist() -> TaskRecord {
        TaskRecord::new("Dentist", "2026-01-16T09:15:30.000Z")
    }

    /// Everything above, in the order the host app would have written it
    pub fn mixed() -> Vec<TaskRecord> {
        vec![pay_rent(), paid_rent(), overdue_report(), garbled(), dentist()]
    }
}

/// Shared preferences JSON with `tasks` stored as an encoded string,
/// as the host application writes it.
pub fn prefs_json(tasks: &[TaskRecord]) -> String {
    let encoded = serde_json::to_string(tasks).unwrap();
    serde_json::json!({ "tasks": encoded, "flutter.theme": "dark" }).to_string()
}
