//! The `Cell` coordinate type

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::AnchorStyle;
use crate::column::{column_to_letters, decode_letters};
use crate::error::{Error, Result};
use crate::sheet::validate_sheet_name;
use crate::{MAX_COLS, MAX_ROWS};

/// A single spreadsheet coordinate (e.g., "A1", "Sheet1!$B$2")
///
/// Column and row are 0-based internally and 1-based/lettered in display.
/// A `Cell` is an immutable value: every "modifying" method returns a new one.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCell"))]
pub struct Cell {
    column: u16,
    row: u32,
    sheet: Option<String>,
    anchor: AnchorStyle,
}

impl Cell {
    /// Create a new cell from 0-based column and row indices
    ///
    /// Negative indices and indices past `XFD1048576` fail with
    /// [`Error::InvalidCoordinate`]. A sheet name, when given, must pass
    /// [`validate_sheet_name`].
    ///
    /// # Examples
    /// ```
    /// use wxls_core::Cell;
    ///
    /// assert_eq!(Cell::new(12, 12, None).unwrap().to_str_address(), "M13");
    /// assert_eq!(Cell::new(1, 1, Some("Sheet1")).unwrap().to_str_address(), "Sheet1!B2");
    /// assert!(Cell::new(-1, 0, None).is_err());
    /// ```
    pub fn new(column: i64, row: i64, sheet: Option<&str>) -> Result<Self> {
        let (column, row) = Self::check_bounds(column, row)?;
        if let Some(name) = sheet {
            validate_sheet_name(name)?;
        }

        Ok(Self {
            column,
            row,
            sheet: sheet.map(str::to_owned),
            anchor: AnchorStyle::None,
        })
    }

    /// Assemble a cell from already-validated parts
    pub(crate) fn from_parts(
        column: u16,
        row: u32,
        sheet: Option<String>,
        anchor: AnchorStyle,
    ) -> Self {
        debug_assert!(column < MAX_COLS && row < MAX_ROWS);
        Self {
            column,
            row,
            sheet,
            anchor,
        }
    }

    fn check_bounds(column: i64, row: i64) -> Result<(u16, u32)> {
        let column_ok = (0..MAX_COLS as i64).contains(&column);
        let row_ok = (0..MAX_ROWS as i64).contains(&row);
        if !column_ok || !row_ok {
            return Err(Error::coordinate(column, row));
        }
        Ok((column as u16, row as u32))
    }

    /// Parse a cell from A1-style notation
    ///
    /// Accepts an optional `Sheet!` prefix and `$` markers. When the text has
    /// no sheet prefix, `default_sheet` is used. A column or row past the
    /// grid fails with [`Error::InvalidCoordinate`], like [`Cell::new`].
    ///
    /// # Examples
    /// ```
    /// use wxls_core::{AnchorStyle, Cell};
    ///
    /// let cell = Cell::parse("Sheet1!$B2", None).unwrap();
    /// assert_eq!(cell.column(), 1);
    /// assert_eq!(cell.row(), 1);
    /// assert_eq!(cell.sheet(), Some("Sheet1"));
    /// assert_eq!(cell.anchor(), AnchorStyle::Column);
    /// ```
    pub fn parse(text: &str, default_sheet: Option<&str>) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let (sheet, reference) = match text.rsplit_once('!') {
            Some((sheet, reference)) => (Some(sheet), reference),
            None => (default_sheet, text),
        };

        let bytes = reference.as_bytes();
        let mut pos = 0;

        let col_absolute = bytes.first() == Some(&b'$');
        if col_absolute {
            pos += 1;
        }

        let col_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }
        if pos == col_start {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                text
            )));
        }
        let column = decode_letters(&reference[col_start..pos])?;

        let row_absolute = bytes.get(pos) == Some(&b'$');
        if row_absolute {
            pos += 1;
        }

        let row_str = &reference[pos..];
        if row_str.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", text)));
        }
        if !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!(
                "invalid row number in '{}'",
                text
            )));
        }

        let row: i64 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", text)))?;

        // Rows are 1-based in text, 0-based internally
        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                text
            )));
        }

        Ok(Self::new(column, row - 1, sheet)?
            .anchored(AnchorStyle::from_flags(row_absolute, col_absolute)))
    }

    /// Column index (0-based, A=0, B=1, ..., XFD=16383)
    pub fn column(&self) -> u16 {
        self.column
    }

    /// Row index (0-based internally, 1-based in display)
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Sheet name, if the cell is sheet-qualified
    pub fn sheet(&self) -> Option<&str> {
        self.sheet.as_deref()
    }

    /// Absolute markers used when formatting
    pub fn anchor(&self) -> AnchorStyle {
        self.anchor
    }

    /// Copy of this cell with the given anchor style
    pub fn anchored(&self, anchor: AnchorStyle) -> Self {
        Self {
            anchor,
            ..self.clone()
        }
    }

    /// Copy of this cell qualified with `sheet`
    pub fn with_sheet(&self, sheet: &str) -> Result<Self> {
        validate_sheet_name(sheet)?;
        Ok(Self {
            sheet: Some(sheet.to_owned()),
            ..self.clone()
        })
    }

    /// Copy of this cell without a sheet qualifier
    pub fn without_sheet(&self) -> Self {
        Self {
            sheet: None,
            ..self.clone()
        }
    }

    /// Move the cell by a signed number of rows and columns
    ///
    /// Fails with [`Error::InvalidCoordinate`] when the result would leave
    /// the worksheet grid.
    pub fn offset(&self, rows: i64, columns: i64) -> Result<Self> {
        let column = (self.column as i64).saturating_add(columns);
        let row = (self.row as i64).saturating_add(rows);
        let (column, row) = Self::check_bounds(column, row)?;
        Ok(Self {
            column,
            row,
            ..self.clone()
        })
    }

    /// Whether `self` and `other` live on the same sheet (both unqualified counts)
    pub fn same_sheet(&self, other: &Cell) -> bool {
        self.sheet == other.sheet
    }

    /// Format as an A1-style string, prefixed with `Sheet!` when qualified
    pub fn to_str_address(&self) -> String {
        let mut result = String::new();

        if let Some(sheet) = &self.sheet {
            result.push_str(sheet);
            result.push('!');
        }

        if self.anchor.col_absolute() {
            result.push('$');
        }
        result.push_str(&column_to_letters(self.column));

        if self.anchor.row_absolute() {
            result.push('$');
        }
        result.push_str(&(self.row + 1).to_string());

        result
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.column == other.column && self.row == other.row && self.sheet == other.sheet
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.column.hash(state);
        self.row.hash(state);
        self.sheet.hash(state);
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_address())
    }
}

impl FromStr for Cell {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, None)
    }
}

/// Unvalidated wire form of a [`Cell`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCell {
    column: i64,
    row: i64,
    sheet: Option<String>,
    #[serde(default)]
    anchor: AnchorStyle,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCell> for Cell {
    type Error = Error;

    fn try_from(raw: RawCell) -> Result<Self> {
        Ok(Cell::new(raw.column, raw.row, raw.sheet.as_deref())?.anchored(raw.anchor))
    }
}
