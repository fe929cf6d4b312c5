//! Spreadsheet cell values and the conversions records are built from.

use std::fmt;

use crate::error::FieldError;

/// A single worksheet cell, independent of the reader that produced it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Blank cell.
    #[default]
    Empty,
    /// Text cell.
    Text(String),
    /// Integer cell.
    Int(i64),
    /// Floating point cell.
    Float(f64),
    /// Boolean cell.
    Bool(bool),
}

impl CellValue {
    /// Returns true for blank cells and whitespace-only text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Text form of the cell, trimmed. Empty cells yield `None`.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Self::Int(v) => Some(v.to_string()),
            Self::Float(v) => Some(v.to_string()),
            Self::Bool(v) => Some(v.to_string()),
        }
    }

    /// Converts the cell into a whole number.
    ///
    /// Whole-valued floats and numeric text are accepted.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] for blank cells, booleans, fractional
    /// floats and text that does not parse as an integer.
    pub fn to_i64(&self, field: &'static str) -> Result<i64, FieldError> {
        match self {
            Self::Int(v) => Ok(*v),
            Self::Float(v) if v.fract() == 0.0 && v.is_finite() => float_to_i64(*v)
                .ok_or_else(|| not_an_integer(field, self)),
            Self::Text(s) if !s.trim().is_empty() => s
                .trim()
                .parse::<i64>()
                .map_err(|_| not_an_integer(field, self)),
            Self::Empty | Self::Text(_) => Err(FieldError::Empty { field }),
            Self::Float(_) | Self::Bool(_) => Err(not_an_integer(field, self)),
        }
    }

    /// Converts the cell into a non-negative whole number.
    ///
    /// # Errors
    ///
    /// Same as [`CellValue::to_i64`], plus [`FieldError::Negative`].
    pub fn to_u64(&self, field: &'static str) -> Result<u64, FieldError> {
        let value = self.to_i64(field)?;
        u64::try_from(value).map_err(|_| FieldError::Negative { field, value })
    }

    /// Converts the cell into a floating point number.
    ///
    /// Text may carry a trailing `%`.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] for blank cells, booleans and text that does
    /// not parse as a number.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self, field: &'static str) -> Result<f64, FieldError> {
        match self {
            Self::Int(v) => Ok(*v as f64),
            Self::Float(v) => Ok(*v),
            Self::Text(s) if !s.trim().is_empty() => {
                let trimmed = s.trim();
                let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
                number
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| FieldError::NotANumber {
                        field,
                        value: trimmed.to_string(),
                        expected: "number",
                    })
            }
            Self::Empty | Self::Text(_) => Err(FieldError::Empty { field }),
            Self::Bool(_) => Err(FieldError::NotANumber {
                field,
                value: self.to_string(),
                expected: "number",
            }),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn float_to_i64(v: f64) -> Option<i64> {
    // i64::MAX is not exactly representable; stay strictly inside the range.
    if v >= -9_223_372_036_854_775_808.0 && v < 9_223_372_036_854_775_808.0 {
        Some(v as i64)
    } else {
        None
    }
}

fn not_an_integer(field: &'static str, cell: &CellValue) -> FieldError {
    FieldError::NotANumber {
        field,
        value: cell.to_string(),
        expected: "integer",
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) => f.write_str(s.trim()),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
