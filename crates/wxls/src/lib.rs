//! # wxls
//!
//! A Rust library for spreadsheet cell and range addresses.
//!
//! ## Features
//!
//! - A1-style formatting of cells (`A1`, `Sheet1!B2`, `$C$3`)
//! - Ranges formatted as `start:end` (`A1:M13`)
//! - Parsing the same notation back into values
//! - Optional range validation (sheet consistency, ordering)
//!
//! ## Example
//!
//! ```rust
//! use wxls::prelude::*;
//!
//! let first = Cell::new(0, 0, None).unwrap();
//! let second = Cell::new(12, 12, None).unwrap();
//! let range = Range::new(first, second);
//! assert_eq!(range.to_str_address(), "A1:M13");
//!
//! let strict = RangePolicy::strict();
//! let reversed = Range::with_policy("C3".parse().unwrap(), "A1".parse().unwrap(), &strict);
//! assert!(reversed.is_err());
//! ```

pub mod prelude;

pub use wxls_core::{
    column_to_letters, letters_to_column, sheet::validate_sheet_name, AnchorStyle, Cell, Error,
    OrderPolicy, Range, RangeCells, RangePolicy, Result, SheetPolicy, MAX_COLS, MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};
