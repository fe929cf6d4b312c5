//! Popview Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod persistence;
pub mod serialization;
pub mod spreadsheet;

pub use persistence::{LOCAL_SETTINGS_FILE, SettingsError, SettingsRepository};
pub use serialization::{SerializationError, from_json_bytes};
pub use spreadsheet::{CalamineSpreadsheetSource, CalamineWorkbook};
