//! Sheet name rules

use crate::error::{Error, Result};
use crate::MAX_SHEET_NAME_LEN;

/// Characters Excel refuses in sheet names
pub const INVALID_SHEET_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

/// Validate a sheet name
///
/// A name must be non-empty, at most [`MAX_SHEET_NAME_LEN`] characters,
/// free of [`INVALID_SHEET_CHARS`] and must not start or end with
/// whitespace. The `:` restriction is what keeps `Sheet1!A1:Sheet1!B2`
/// unambiguous.
pub fn validate_sheet_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(Error::InvalidSheetName(format!(
            "Sheet name too long (max {} characters)",
            MAX_SHEET_NAME_LEN
        )));
    }
    if name.trim() != name {
        return Err(Error::InvalidSheetName(
            "Sheet name cannot start or end with whitespace".into(),
        ));
    }

    for c in INVALID_SHEET_CHARS {
        if name.contains(*c) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }
    }

    Ok(())
}
