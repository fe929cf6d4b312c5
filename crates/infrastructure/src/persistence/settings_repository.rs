//! Application settings lookup.
//!
//! Settings are read from the first file that exists:
//! - `./popview.json` in the working directory
//! - the platform config directory (`~/.config/popview/settings.json` on
//!   Linux, `%APPDATA%/popview/settings.json` on Windows)
//!
//! When neither exists the defaults are used.

use std::fs;
use std::path::{Path, PathBuf};

use popview_domain::AppSettings;
use tracing::{debug, info};

use crate::serialization::{SerializationError, from_json_bytes};

/// File name looked up in the working directory.
pub const LOCAL_SETTINGS_FILE: &str = "popview.json";

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error while reading the settings file.
    #[error("IO error reading {path}: {source}")]
    Io {
        /// Settings file path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The settings file is not valid.
    #[error("Invalid settings file {path}: {source}")]
    Serialization {
        /// Settings file path.
        path: PathBuf,
        /// Underlying error.
        source: SerializationError,
    },
}

/// Repository for application settings.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    candidates: Vec<PathBuf>,
}

impl Default for SettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsRepository {
    /// Creates a repository using the standard lookup locations.
    #[must_use]
    pub fn new() -> Self {
        let mut candidates = vec![PathBuf::from(LOCAL_SETTINGS_FILE)];
        if let Some(path) = Self::config_file() {
            candidates.push(path);
        }
        Self { candidates }
    }

    /// Creates a repository that only consults `path`.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            candidates: vec![path.into()],
        }
    }

    /// Returns the path of the settings file in the platform config directory.
    #[must_use]
    pub fn config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("popview").join("settings.json"))
    }

    /// Paths consulted, in order.
    #[must_use]
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Loads settings from the first existing candidate.
    ///
    /// Returns default settings if no candidate exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load(&self) -> Result<AppSettings, SettingsError> {
        match self.candidates.iter().find(|p| p.is_file()) {
            Some(path) => Self::load_file(path),
            None => {
                debug!("no settings file found, using defaults");
                Ok(AppSettings::default())
            }
        }
    }

    fn load_file(path: &Path) -> Result<AppSettings, SettingsError> {
        let content = fs::read(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = from_json_bytes(&content).map_err(|source| SettingsError::Serialization {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }
}
