//! File-based persistence.

mod settings_repository;

pub use settings_repository::{LOCAL_SETTINGS_FILE, SettingsError, SettingsRepository};
