//! Spreadsheet source backed by `calamine`.
//!
//! Handles xlsx, xlsm, xlsb, xls and ods; the format is picked from the file
//! extension.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use popview_application::ports::{SheetRow, SpreadsheetError, SpreadsheetSource, Workbook};
use popview_domain::CellValue;
use tracing::debug;

/// Opens workbooks from the local file system with `calamine`.
#[derive(Debug, Clone, Default)]
pub struct CalamineSpreadsheetSource;

impl CalamineSpreadsheetSource {
    /// Creates a new `CalamineSpreadsheetSource`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SpreadsheetSource for CalamineSpreadsheetSource {
    type Workbook = CalamineWorkbook;

    fn open(&self, path: &Path) -> Result<CalamineWorkbook, SpreadsheetError> {
        if !path.is_file() {
            return Err(SpreadsheetError::NotFound(path.to_path_buf()));
        }
        let sheets = open_workbook_auto(path).map_err(|e| SpreadsheetError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "opened workbook");
        Ok(CalamineWorkbook {
            path: path.to_path_buf(),
            sheets,
        })
    }
}

/// An open `calamine` workbook. The file handle is released on close or drop.
pub struct CalamineWorkbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl Workbook for CalamineWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn read_rows(&mut self, sheet: &str) -> Result<Vec<SheetRow>, SpreadsheetError> {
        let available = self.sheets.sheet_names();
        if !available.iter().any(|name| name == sheet) {
            return Err(SpreadsheetError::WorksheetNotFound {
                name: sheet.to_string(),
                available,
            });
        }

        let range = self
            .sheets
            .worksheet_range(sheet)
            .map_err(|e| SpreadsheetError::Read {
                sheet: sheet.to_string(),
                message: e.to_string(),
            })?;

        Ok(range_to_rows(&range))
    }

    fn close(self) -> Result<(), SpreadsheetError> {
        debug!(path = %self.path.display(), "closing workbook");
        drop(self.sheets);
        Ok(())
    }
}

/// Converts a used range into rows anchored at column 0.
///
/// `calamine` trims leading empty columns and rows from the range, so cells
/// are shifted back to their absolute positions.
fn range_to_rows(range: &Range<Data>) -> Vec<SheetRow> {
    let Some((first_row, first_col)) = range.start() else {
        return Vec::new();
    };
    let row_offset = first_row as usize;
    let col_offset = first_col as usize;

    range
        .rows()
        .enumerate()
        .map(|(i, row)| {
            let mut cells = Vec::with_capacity(col_offset + row.len());
            cells.resize(col_offset, CellValue::Empty);
            cells.extend(row.iter().map(to_cell_value));
            SheetRow::new(row_offset + i, cells)
        })
        .collect()
}

fn to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(v) => CellValue::Int(*v),
        Data::Float(v) => CellValue::Float(*v),
        Data::Bool(v) => CellValue::Bool(*v),
        other => CellValue::Text(other.to_string()),
    }
}
