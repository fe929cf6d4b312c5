//! Popview Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - Use case orchestration

pub mod ports;
pub mod use_cases;

pub use ports::{SheetRow, SpreadsheetError, SpreadsheetSource, Workbook};
pub use use_cases::{
    LoadPopulation, LoadPopulationError, LoadPopulationInput, LoadPopulationOutput, LoadReport,
    RowRejection, collect_records,
};
