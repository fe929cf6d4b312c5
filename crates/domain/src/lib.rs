//! Popview Domain - Core types
//!
//! This crate defines the domain model for the Population Viewer.
//! All types here are pure Rust with no I/O dependencies.

pub mod cell;
pub mod error;
pub mod layout;
pub mod record;
pub mod settings;

pub use cell::CellValue;
pub use error::{DomainError, DomainResult, FieldError};
pub use layout::{STATE_SUMMARY_LEVEL, SheetLayout};
pub use record::{PopulationCatalog, PopulationRecord};
pub use settings::{AppSettings, DatasetSettings, WindowSettings};
