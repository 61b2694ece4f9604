//! Error types for wxls-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wxls-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Column or row is negative or outside the worksheet grid
    #[error("Invalid coordinate: column {column}, row {row} (max column {max_col}, max row {max_row})", max_col = crate::MAX_COLS - 1, max_row = crate::MAX_ROWS - 1)]
    InvalidCoordinate { column: i64, row: i64 },

    /// Address text could not be parsed
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Range cells disagree about their sheet
    #[error("Sheet mismatch: {0}")]
    SheetMismatch(String),

    /// Range end lies before its start
    #[error("Reversed range: {0}")]
    ReversedRange(String),
}

impl Error {
    /// Create an [`Error::InvalidCoordinate`] from any integer pair
    pub fn coordinate(column: impl Into<i64>, row: impl Into<i64>) -> Self {
        Error::InvalidCoordinate {
            column: column.into(),
            row: row.into(),
        }
    }
}
