//! Load population use case.

use std::path::PathBuf;

use popview_domain::{DatasetSettings, DomainError, FieldError, PopulationRecord, SheetLayout};
use tracing::{debug, info, warn};

use crate::ports::{SheetRow, SpreadsheetError, SpreadsheetSource, Workbook};

/// Errors that can occur when loading population data.
///
/// All of them are start-up failures: the data set is required.
#[derive(Debug, thiserror::Error)]
pub enum LoadPopulationError {
    /// The workbook or worksheet could not be opened or read.
    #[error(transparent)]
    Spreadsheet(#[from] SpreadsheetError),

    /// The configured layout is unusable.
    #[error(transparent)]
    Layout(#[from] DomainError),
}

/// Input for loading population data.
#[derive(Debug, Clone)]
pub struct LoadPopulationInput {
    /// Path to the workbook.
    pub workbook_path: PathBuf,
    /// Worksheet to read.
    pub worksheet: String,
    /// Column layout of the worksheet.
    pub layout: SheetLayout,
}

impl From<&DatasetSettings> for LoadPopulationInput {
    fn from(settings: &DatasetSettings) -> Self {
        Self {
            workbook_path: settings.workbook_path.clone(),
            worksheet: settings.worksheet.clone(),
            layout: settings.layout.clone(),
        }
    }
}

/// A state-level row that was dropped because a field failed to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRejection {
    /// Zero-based worksheet row.
    pub row: usize,
    /// Conversion failure.
    pub error: FieldError,
}

/// What happened to the rows of a load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows read from the worksheet, header included.
    pub rows_scanned: usize,
    /// Rows skipped for having too few populated columns.
    pub short_rows: usize,
    /// Rows excluded by the summary-level filter.
    pub filtered_rows: usize,
    /// State-level rows dropped because of conversion failures.
    pub rejected: Vec<RowRejection>,
}

/// Output of a successful load.
#[derive(Debug, Clone)]
pub struct LoadPopulationOutput {
    /// Records in worksheet order.
    pub records: Vec<PopulationRecord>,
    /// Row accounting for the load.
    pub report: LoadReport,
}

/// Use case for loading state population records from a worksheet.
pub struct LoadPopulation<S: SpreadsheetSource> {
    source: S,
}

impl<S: SpreadsheetSource> LoadPopulation<S> {
    /// Creates a new `LoadPopulation` use case.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Opens the workbook, reads the worksheet and maps its state-level rows.
    ///
    /// The workbook is closed before this returns, whether reading succeeded
    /// or not. A failure to close is logged and otherwise ignored.
    ///
    /// # Errors
    /// - Returns error if the layout is invalid
    /// - Returns error if the workbook cannot be opened
    /// - Returns error if the worksheet is missing or unreadable
    pub fn execute(
        &self,
        input: &LoadPopulationInput,
    ) -> Result<LoadPopulationOutput, LoadPopulationError> {
        input.layout.validate()?;

        let mut workbook = self.source.open(&input.workbook_path)?;
        let rows = workbook.read_rows(&input.worksheet);
        if let Err(e) = workbook.close() {
            warn!(path = %input.workbook_path.display(), error = %e, "failed to close workbook");
        }
        let rows = rows?;

        let output = collect_records(&input.layout, rows);
        info!(
            path = %input.workbook_path.display(),
            worksheet = %input.worksheet,
            records = output.records.len(),
            rows_scanned = output.report.rows_scanned,
            short_rows = output.report.short_rows,
            filtered_rows = output.report.filtered_rows,
            rejected = output.report.rejected.len(),
            "loaded population data"
        );
        Ok(output)
    }
}

/// Filters and maps worksheet rows into records.
///
/// The first row is the header. Rows narrower than the layout and rows that
/// are not state-level aggregates are skipped silently. State-level rows with
/// unconvertible fields are skipped with a warning and recorded in the report.
#[must_use]
pub fn collect_records(layout: &SheetLayout, rows: Vec<SheetRow>) -> LoadPopulationOutput {
    let min_columns = layout.min_columns();
    let mut report = LoadReport::default();
    let mut records = Vec::new();

    for (position, row) in rows.into_iter().enumerate() {
        report.rows_scanned += 1;
        if position == 0 {
            continue;
        }
        if row.populated_width() < min_columns {
            debug!(row = row.index, "skipping short row");
            report.short_rows += 1;
            continue;
        }
        if !layout.is_state_level(&row.cells) {
            report.filtered_rows += 1;
            continue;
        }
        match layout.parse_record(&row.cells) {
            Ok(record) => records.push(record),
            Err(error) => {
                warn!(row = row.index, %error, "skipping state row with invalid field");
                report.rejected.push(RowRejection {
                    row: row.index,
                    error,
                });
            }
        }
    }

    LoadPopulationOutput { records, report }
}
