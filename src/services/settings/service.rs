use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::WidgetSettings;

const SETTINGS_FILE: &str = "settings.toml";
const PREFS_FILE: &str = "HomeWidgetPreferences.json";

/// Loads and stores widget settings as TOML.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file in the platform config directory.
    pub fn from_project_dirs() -> Self {
        let path = match project_dirs() {
            Some(dirs) => dirs.config_dir().join(SETTINGS_FILE),
            None => {
                log::warn!("Unable to resolve project directory; using current dir for settings");
                PathBuf::from(SETTINGS_FILE)
            }
        };
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings, falling back to defaults when no file exists
    pub fn get(&self) -> Result<WidgetSettings> {
        if !self.path.exists() {
            log::debug!(
                "No settings at {}; using defaults",
                self.path.display()
            );
            return Ok(WidgetSettings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: WidgetSettings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &WidgetSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create dir {}", parent.display()))?;
            }
        }

        let data = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}

/// Where the host app's shared preferences live when not configured.
pub fn resolve_cache_path(settings: &WidgetSettings) -> PathBuf {
    if let Some(path) = &settings.cache_path {
        return path.clone();
    }

    match project_dirs() {
        Some(dirs) => dirs.data_dir().join(PREFS_FILE),
        None => {
            log::warn!("Unable to resolve project directory; using current dir for task cache");
            PathBuf::from(PREFS_FILE)
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "Sun2", "DeadlineDash")
}
