//! Read-only access to the task cache the host application writes.
//!
//! The host stores its widget data in a shared key/value file; the task
//! list lives under one key as a JSON-encoded array. Every refresh reads
//! a fresh snapshot through [`TaskSnapshotProvider`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::task::TaskRecord;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to read task cache {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("task cache is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("task cache has unexpected shape: {0}")]
    InvalidShape(String),
}

/// Supplies the task list for one refresh.
pub trait TaskSnapshotProvider {
    fn snapshot(&self) -> Result<Vec<TaskRecord>, CacheError>;
}

/// Fixed in-memory task list.
#[derive(Debug, Clone, Default)]
pub struct StaticSnapshot {
    tasks: Vec<TaskRecord>,
}

impl StaticSnapshot {
    pub fn new(tasks: Vec<TaskRecord>) -> Self {
        Self { tasks }
    }
}

impl TaskSnapshotProvider for StaticSnapshot {
    fn snapshot(&self) -> Result<Vec<TaskRecord>, CacheError> {
        Ok(self.tasks.clone())
    }
}

/// Shared preferences file: a JSON object whose `key` entry holds the task
/// list, either as an encoded string or as an inline array.
#[derive(Debug, Clone)]
pub struct SharedPrefsFile {
    path: PathBuf,
    key: String,
}

impl SharedPrefsFile {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskSnapshotProvider for SharedPrefsFile {
    fn snapshot(&self) -> Result<Vec<TaskRecord>, CacheError> {
        if !self.path.exists() {
            log::debug!("No task cache at {}; showing no tasks", self.path.display());
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&self.path).map_err(|source| CacheError::Io {
            path: self.path.clone(),
            source,
        })?;
        let prefs: Map<String, Value> = serde_json::from_str(&data)?;
        tasks_from_prefs(&prefs, &self.key)
    }
}

/// Pull the task list stored under `key`. A missing key reads as `"[]"`.
pub fn tasks_from_prefs(prefs: &Map<String, Value>, key: &str) -> Result<Vec<TaskRecord>, CacheError> {
    match prefs.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(encoded)) => decode_task_list(encoded),
        Some(Value::Array(items)) => Ok(decode_items(items)),
        Some(other) => Err(CacheError::InvalidShape(format!(
            "'{}' should hold a task array, found {}",
            key,
            value_kind(other)
        ))),
    }
}

/// Decode a JSON-encoded task array, skipping records that do not decode.
pub fn decode_task_list(encoded: &str) -> Result<Vec<TaskRecord>, CacheError> {
    match serde_json::from_str::<Value>(encoded)? {
        Value::Array(items) => Ok(decode_items(&items)),
        other => Err(CacheError::InvalidShape(format!(
            "expected a task array, found {}",
            value_kind(&other)
        ))),
    }
}

fn decode_items(items: &[Value]) -> Vec<TaskRecord> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            match serde_json::from_value::<TaskRecord>(item.clone()) {
                Ok(task) => Some(task),
                Err(err) => {
                    log::warn!("Skipping cached task #{}: {}", index, err);
                    None
                }
            }
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
