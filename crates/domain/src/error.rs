//! Domain error types

use thiserror::Error;

/// A single cell could not be converted into the field it feeds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The row has no cell at the field's column.
    #[error("{field}: missing cell at column {column}")]
    Missing {
        /// Field name.
        field: &'static str,
        /// Zero-based column offset.
        column: usize,
    },

    /// The cell is blank where a value is required.
    #[error("{field}: cell is empty")]
    Empty {
        /// Field name.
        field: &'static str,
    },

    /// The cell does not hold a number of the expected kind.
    #[error("{field}: '{value}' is not a valid {expected}")]
    NotANumber {
        /// Field name.
        field: &'static str,
        /// Text form of the offending cell.
        value: String,
        /// Kind of number expected (e.g. "integer").
        expected: &'static str,
    },

    /// A population estimate is below zero.
    #[error("{field}: estimate {value} is negative")]
    Negative {
        /// Field name.
        field: &'static str,
        /// The parsed value.
        value: i64,
    },
}

impl FieldError {
    /// Name of the field that failed to convert.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Missing { field, .. }
            | Self::Empty { field }
            | Self::NotANumber { field, .. }
            | Self::Negative { field, .. } => field,
        }
    }
}

/// Domain-level errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A row could not be mapped into a record.
    #[error("invalid field: {0}")]
    Field(#[from] FieldError),

    /// A sheet layout is unusable.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
