//! Spreadsheet access port.

use std::path::{Path, PathBuf};

use popview_domain::CellValue;

/// Error type for spreadsheet operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpreadsheetError {
    /// The workbook file does not exist.
    #[error("Workbook not found: {0}")]
    NotFound(PathBuf),

    /// The workbook exists but could not be opened or is not a spreadsheet.
    #[error("Failed to open workbook {path}: {message}")]
    Open {
        /// Workbook path.
        path: PathBuf,
        /// Reader error text.
        message: String,
    },

    /// The workbook has no worksheet with the requested name.
    #[error("Worksheet '{name}' not found (available: {})", available.join(", "))]
    WorksheetNotFound {
        /// Requested worksheet name.
        name: String,
        /// Worksheet names present in the workbook.
        available: Vec<String>,
    },

    /// The worksheet could not be read.
    #[error("Failed to read worksheet '{sheet}': {message}")]
    Read {
        /// Worksheet name.
        sheet: String,
        /// Reader error text.
        message: String,
    },

    /// Releasing the workbook failed.
    #[error("Failed to close workbook: {0}")]
    Close(String),
}

/// One worksheet row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetRow {
    /// Zero-based row number in the worksheet.
    pub index: usize,
    /// Cells from column 0 onwards.
    pub cells: Vec<CellValue>,
}

impl SheetRow {
    /// Creates a row.
    #[must_use]
    pub const fn new(index: usize, cells: Vec<CellValue>) -> Self {
        Self { index, cells }
    }

    /// Number of cells up to and including the last non-empty one.
    #[must_use]
    pub fn populated_width(&self) -> usize {
        self.cells
            .iter()
            .rposition(|c| !c.is_empty())
            .map_or(0, |last| last + 1)
    }
}

/// An open workbook.
///
/// The handle is held until [`Workbook::close`] is called or the value is
/// dropped.
pub trait Workbook {
    /// Names of the worksheets, in workbook order.
    fn sheet_names(&self) -> Vec<String>;

    /// Reads every row of a worksheet, in file order.
    ///
    /// # Errors
    ///
    /// Returns [`SpreadsheetError::WorksheetNotFound`] if the sheet does not
    /// exist, or [`SpreadsheetError::Read`] if it cannot be decoded.
    fn read_rows(&mut self, sheet: &str) -> Result<Vec<SheetRow>, SpreadsheetError>;

    /// Releases the underlying resource.
    ///
    /// # Errors
    ///
    /// Returns [`SpreadsheetError::Close`] if the resource reports a failure
    /// while being released.
    fn close(self) -> Result<(), SpreadsheetError>
    where
        Self: Sized;
}

/// Opens workbooks.
///
/// This trait allows substituting an in-memory spreadsheet in tests.
pub trait SpreadsheetSource {
    /// Workbook handle type.
    type Workbook: Workbook;

    /// Opens the workbook at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SpreadsheetError::NotFound`] if the file is missing, or
    /// [`SpreadsheetError::Open`] if it cannot be parsed.
    fn open(&self, path: &Path) -> Result<Self::Workbook, SpreadsheetError>;
}
