//! # wxls-core
//!
//! Core coordinate types for the wxls spreadsheet addressing library.
//!
//! This crate provides:
//! - [`Cell`] - A single coordinate (column, row, optional sheet)
//! - [`Range`] - A pair of cells, formatted as `A1:B2`
//! - [`RangePolicy`] - Optional validation applied when building ranges
//! - Column letter conversion ([`column_to_letters`], [`letters_to_column`])
//!
//! ## Example
//!
//! ```rust
//! use wxls_core::{Cell, Range};
//!
//! let start = Cell::new(0, 0, None).unwrap();
//! let end = Cell::new(12, 12, None).unwrap();
//! assert_eq!(start.to_str_address(), "A1");
//! assert_eq!(end.to_str_address(), "M13");
//!
//! let range = Range::new(start, end);
//! assert_eq!(range.to_str_address(), "A1:M13");
//!
//! let cell = Cell::new(1, 1, Some("Sheet1")).unwrap();
//! assert_eq!(cell.to_str_address(), "Sheet1!B2");
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod policy;
pub mod range;
pub mod sheet;

// Re-exports for convenience
pub use cell::{AnchorStyle, Cell};
pub use column::{column_to_letters, letters_to_column};
pub use error::{Error, Result};
pub use policy::{OrderPolicy, RangePolicy, SheetPolicy};
pub use range::{Range, RangeCells};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
