//! Spreadsheet adapters.

mod calamine_source;

pub use calamine_source::{CalamineSpreadsheetSource, CalamineWorkbook};
