//! Column letter conversion
//!
//! Columns are labelled with a bijective base-26 encoding: `A`..`Z`, then
//! `AA`..`ZZ`, then `AAA`, up to `XFD` for the last Excel column.

use crate::error::{Error, Result};
use crate::MAX_COLS;

/// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
pub fn column_to_letters(col: u16) -> String {
    let mut letters = Vec::with_capacity(3);
    let mut n = col as u32 + 1; // 1-based for calculation

    while n > 0 {
        n -= 1;
        letters.push((n % 26) as u8 + b'A');
        n /= 26;
    }

    letters.iter().rev().map(|&b| b as char).collect()
}

/// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
///
/// Letters are case-insensitive. Letters past `XFD` fail with
/// [`Error::InvalidCoordinate`] on row 0.
pub fn letters_to_column(letters: &str) -> Result<u16> {
    let index = decode_letters(letters)?;
    if index >= MAX_COLS as i64 {
        return Err(Error::coordinate(index, 0));
    }
    Ok(index as u16)
}

/// Decode letters to a 0-based index without the grid check
///
/// Saturates at `i64::MAX` on very long input.
pub(crate) fn decode_letters(letters: &str) -> Result<i64> {
    if letters.is_empty() {
        return Err(Error::InvalidAddress("empty column letters".into()));
    }

    let mut col: i64 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidAddress(format!(
                "invalid column letter '{}'",
                c
            )));
        }
        let digit = (c.to_ascii_uppercase() as u8 - b'A' + 1) as i64;
        col = col.saturating_mul(26).saturating_add(digit);
    }

    Ok(col - 1)
}
