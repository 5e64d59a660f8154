// Settings module
// Widget configuration persisted as TOML

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which widget layout to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WidgetLayout {
    /// Plain list of active tasks
    #[default]
    TaskList,
    /// "Nearest task" banner above the list
    NearestSummary,
}

impl FromStr for WidgetLayout {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "task_list" | "list" => Ok(Self::TaskList),
            "nearest_summary" | "summary" => Ok(Self::NearestSummary),
            other => Err(format!("Unknown widget layout '{}'", other)),
        }
    }
}

/// Widget settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub layout: WidgetLayout,
    /// Shared preferences file written by the host app. `None` resolves to
    /// the platform data directory.
    pub cache_path: Option<PathBuf>,
    /// Key under which the host app stores the task list.
    pub tasks_key: String,
    /// Periodic fallback refresh in minutes. 0 disables it so the widget
    /// only wakes for the next deadline.
    pub refresh_interval_minutes: u32,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            layout: WidgetLayout::TaskList,
            cache_path: None,
            tasks_key: "tasks".to_string(),
            refresh_interval_minutes: 30,
        }
    }
}

impl WidgetSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.tasks_key.trim().is_empty() {
            return Err("Tasks key cannot be empty".to_string());
        }

        // A day is the longest the platform lets a widget go without an update
        if self.refresh_interval_minutes > 24 * 60 {
            return Err("Refresh interval cannot exceed 24 hours".to_string());
        }

        if let Some(ref path) = self.cache_path {
            if path.as_os_str().is_empty() {
                return Err("Cache path cannot be empty".to_string());
            }
        }

        Ok(())
    }
}
