mod service;

pub use service::{resolve_cache_path, SettingsService};
