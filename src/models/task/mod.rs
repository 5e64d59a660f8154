// Task model
// Records written by the host application into the shared widget cache

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Wire format of deadlines in the cache: `2026-01-20T12:00:00.000Z`.
/// `%.f` keeps the fractional part lenient about its digit count.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// A single task as the host application caches it for the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub name: String,
    pub deadline: String,
    #[serde(rename = "isCompleted", default, deserialize_with = "null_as_false")]
    pub is_completed: bool,
}

/// `isCompleted: null` reads the same as an absent flag.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl TaskRecord {
    pub fn new(name: impl Into<String>, deadline: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deadline: deadline.into(),
            is_completed: false,
        }
    }

    pub fn completed(mut self) -> Self {
        self.is_completed = true;
        self
    }

    /// Parsed deadline. Malformed timestamps fall back to the Unix epoch so
    /// the task reads as long expired instead of failing the refresh.
    pub fn deadline_at(&self) -> DateTime<Utc> {
        parse_deadline(&self.deadline).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

/// Parse a cache deadline string as UTC, returning `None` when malformed.
pub fn parse_deadline(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value.trim(), DEADLINE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Format an instant the way the host application writes deadlines.
pub fn format_deadline(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
