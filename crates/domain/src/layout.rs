//! Fixed column layout of the population worksheet.
//!
//! Offsets are zero-based and follow the Census `co-est2021-alldata` sheet:
//! `SUMLEV` in column 0, `STNAME` in column 5, `POPESTIMATE2020`,
//! `POPESTIMATE2021`, `NPOPCHG2020` and `NPOPCHG2021` in columns 8-11.
//!
//! The Census export carries no percent-difference column: its column 12 is
//! `BIRTHS2020`. Workbooks fed to the default layout must be prepared with the
//! percent difference written into column 12, or configure
//! `pop_percent_diff` to point at wherever that column was added.

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;
use crate::error::{DomainError, DomainResult, FieldError};
use crate::record::PopulationRecord;

/// Summary-level code of state aggregate rows.
pub const STATE_SUMMARY_LEVEL: &str = "40";

/// Column offsets and the summary-level filter for the population sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    /// Column holding the summary-level discriminator.
    pub summary_level: usize,
    /// Summary-level value that marks state-level rows.
    pub state_level_code: String,
    /// State name column.
    pub state: usize,
    /// 2020 estimate column.
    pub pop_estimate_2020: usize,
    /// 2021 estimate column.
    pub pop_estimate_2021: usize,
    /// 2020 change column.
    pub pop_change_2020: usize,
    /// 2021 change column.
    pub pop_change_2021: usize,
    /// Percent difference column. Not part of the Census export; the
    /// workbook must supply it.
    pub pop_percent_diff: usize,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            summary_level: 0,
            state_level_code: STATE_SUMMARY_LEVEL.to_string(),
            state: 5,
            pop_estimate_2020: 8,
            pop_estimate_2021: 9,
            pop_change_2020: 10,
            pop_change_2021: 11,
            pop_percent_diff: 12,
        }
    }
}

impl SheetLayout {
    /// Smallest populated width a row needs to be considered.
    #[must_use]
    pub fn min_columns(&self) -> usize {
        [
            self.summary_level,
            self.state,
            self.pop_estimate_2020,
            self.pop_estimate_2021,
            self.pop_change_2020,
            self.pop_change_2021,
            self.pop_percent_diff,
        ]
        .into_iter()
        .max()
        .unwrap_or_default()
            + 1
    }

    /// Checks that the layout can select anything at all.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLayout`] when the state-level code is blank.
    pub fn validate(&self) -> DomainResult<()> {
        if self.state_level_code.trim().is_empty() {
            return Err(DomainError::InvalidLayout(
                "state_level_code must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns true when the row's summary-level cell marks a state aggregate.
    ///
    /// Codes compare numerically when both sides are unsigned integers, so a
    /// text `"040"` matches a numeric `40`.
    #[must_use]
    pub fn is_state_level(&self, cells: &[CellValue]) -> bool {
        let Some(text) = cells.get(self.summary_level).and_then(CellValue::as_text) else {
            return false;
        };
        let expected = self.state_level_code.trim();
        match (parse_code(&text), parse_code(expected)) {
            (Some(actual), Some(wanted)) => actual == wanted,
            _ => text == expected,
        }
    }

    /// Maps the fixed-offset cells of a row into a record.
    ///
    /// # Errors
    ///
    /// Returns the first [`FieldError`] encountered, in field order.
    pub fn parse_record(&self, cells: &[CellValue]) -> Result<PopulationRecord, FieldError> {
        let cell = |column: usize, field: &'static str| {
            cells.get(column).ok_or(FieldError::Missing { field, column })
        };

        let state = cell(self.state, "state")?
            .as_text()
            .ok_or(FieldError::Empty { field: "state" })?;

        Ok(PopulationRecord {
            state,
            pop_estimate_2020: cell(self.pop_estimate_2020, "pop_estimate_2020")?
                .to_u64("pop_estimate_2020")?,
            pop_estimate_2021: cell(self.pop_estimate_2021, "pop_estimate_2021")?
                .to_u64("pop_estimate_2021")?,
            pop_change_2020: cell(self.pop_change_2020, "pop_change_2020")?
                .to_i64("pop_change_2020")?,
            pop_change_2021: cell(self.pop_change_2021, "pop_change_2021")?
                .to_i64("pop_change_2021")?,
            pop_percent_diff: cell(self.pop_percent_diff, "pop_percent_diff")?
                .to_f64("pop_percent_diff")?,
        })
    }
}

fn parse_code(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
