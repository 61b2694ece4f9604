//! Range type: an ordered pair of cells

use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::policy::{check_sheets, OrderPolicy, RangePolicy, SheetPolicy};

/// A pair of cells (e.g., "A1:M13", "Sheet1!A1:Sheet1!B2")
///
/// [`Range::new`] keeps both cells exactly as given: no sheet check and no
/// reordering. Use [`Range::with_policy`] to opt into either.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    start: Cell,
    end: Cell,
}

impl Range {
    /// Create a new range from two cells
    ///
    /// # Examples
    /// ```
    /// use wxls_core::{Cell, Range};
    ///
    /// let range = Range::new(Cell::new(0, 0, None).unwrap(), Cell::new(12, 12, None).unwrap());
    /// assert_eq!(range.to_str_address(), "A1:M13");
    /// ```
    pub fn new(start: Cell, end: Cell) -> Self {
        Self { start, end }
    }

    /// Create a range covering a single cell
    pub fn single(cell: Cell) -> Self {
        Self {
            start: cell.clone(),
            end: cell,
        }
    }

    /// Create a range, applying the checks selected by `policy`
    pub fn with_policy(start: Cell, end: Cell, policy: &RangePolicy) -> Result<Self> {
        if policy.sheets == SheetPolicy::Consistent {
            check_sheets(&start, &end)?;
        }

        let range = Self::new(start, end);
        if !range.is_reversed() {
            return Ok(range);
        }

        match policy.order {
            OrderPolicy::AsGiven => Ok(range),
            OrderPolicy::Normalize => {
                tracing::debug!(range = %range, "normalizing reversed range");
                Ok(range.normalized())
            }
            OrderPolicy::Reject => Err(Error::ReversedRange(format!(
                "'{}' ends before it starts",
                range
            ))),
        }
    }

    /// Parse a range from `A1:B2` notation
    ///
    /// Each side is parsed as a [`Cell`], so `Sheet1!A1:Sheet1!B2` keeps a
    /// sheet on both ends while `Sheet1!A1:B2` only qualifies the start.
    /// Text without a colon parses as a single-cell range.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();

        match text.split_once(':') {
            Some((start, end)) => {
                if end.contains(':') {
                    return Err(Error::InvalidAddress(format!(
                        "too many ':' in range '{}'",
                        text
                    )));
                }
                Ok(Self::new(Cell::parse(start, None)?, Cell::parse(end, None)?))
            }
            None => Ok(Self::single(Cell::parse(text, None)?)),
        }
    }

    /// First cell of the range, as given
    pub fn start(&self) -> &Cell {
        &self.start
    }

    /// Last cell of the range, as given
    pub fn end(&self) -> &Cell {
        &self.end
    }

    /// Sheet of the range, taken from its start cell
    pub fn sheet(&self) -> Option<&str> {
        self.start.sheet()
    }

    /// Format as `start:end`, each side formatted by [`Cell::to_str_address`]
    pub fn to_str_address(&self) -> String {
        format!(
            "{}:{}",
            self.start.to_str_address(),
            self.end.to_str_address()
        )
    }

    /// `(min_col, min_row, max_col, max_row)` of the bounding box
    fn bounds(&self) -> (u16, u32, u16, u32) {
        (
            self.start.column().min(self.end.column()),
            self.start.row().min(self.end.row()),
            self.start.column().max(self.end.column()),
            self.start.row().max(self.end.row()),
        )
    }

    /// Whether the end lies above or to the left of the start
    pub fn is_reversed(&self) -> bool {
        self.start.column() > self.end.column() || self.start.row() > self.end.row()
    }

    /// Copy with the coordinates reordered to top-left/bottom-right
    ///
    /// Sheets and anchors stay with the start and end positions.
    pub fn normalized(&self) -> Self {
        let (min_col, min_row, max_col, max_row) = self.bounds();
        Self {
            start: Cell::from_parts(
                min_col,
                min_row,
                self.start.sheet().map(str::to_owned),
                self.start.anchor(),
            ),
            end: Cell::from_parts(
                max_col,
                max_row,
                self.end.sheet().map(str::to_owned),
                self.end.anchor(),
            ),
        }
    }

    /// Check if a cell is within this range
    ///
    /// The cell must be on the range's sheet (both unqualified counts) and
    /// inside its bounding box.
    pub fn contains(&self, cell: &Cell) -> bool {
        let (min_col, min_row, max_col, max_row) = self.bounds();

        self.start.same_sheet(cell)
            && (min_col..=max_col).contains(&cell.column())
            && (min_row..=max_row).contains(&cell.row())
    }

    /// Smallest range covering both this range and `cell`
    ///
    /// Fails with [`Error::SheetMismatch`] when the cell is on a different
    /// sheet. An unqualified cell is taken to be on the range's sheet.
    ///
    /// # Examples
    /// ```
    /// use wxls_core::{Cell, Range};
    ///
    /// let range: Range = "A1:B2".parse().unwrap();
    /// let grown = range.including(&"C1".parse().unwrap()).unwrap();
    /// assert_eq!(grown.to_str_address(), "A1:C2");
    /// ```
    pub fn including(&self, cell: &Cell) -> Result<Self> {
        match (self.sheet(), cell.sheet()) {
            (Some(mine), Some(theirs)) if mine != theirs => {
                return Err(Error::SheetMismatch(format!(
                    "cannot extend range on '{}' with a cell on '{}'",
                    mine, theirs
                )));
            }
            (None, Some(theirs)) => {
                return Err(Error::SheetMismatch(format!(
                    "cannot extend an unqualified range with a cell on '{}'",
                    theirs
                )));
            }
            _ => {}
        }

        let (min_col, min_row, max_col, max_row) = self.bounds();
        let (cell_col, cell_row) = (cell.column(), cell.row());
        if (min_col..=max_col).contains(&cell_col) && (min_row..=max_row).contains(&cell_row) {
            return Ok(self.clone());
        }

        Ok(Self {
            start: Cell::from_parts(
                min_col.min(cell_col),
                min_row.min(cell_row),
                self.start.sheet().map(str::to_owned),
                self.start.anchor(),
            ),
            end: Cell::from_parts(
                max_col.max(cell_col),
                max_row.max(cell_row),
                self.end.sheet().map(str::to_owned),
                self.end.anchor(),
            ),
        })
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> u32 {
        let (_, min_row, _, max_row) = self.bounds();
        max_row - min_row + 1
    }

    /// Get the number of columns in the range
    pub fn col_count(&self) -> u16 {
        let (min_col, _, max_col, _) = self.bounds();
        max_col - min_col + 1
    }

    /// Get the total number of cells in the range
    pub fn cell_count(&self) -> u64 {
        self.row_count() as u64 * self.col_count() as u64
    }

    /// Whether the range covers exactly one cell
    ///
    /// Only coordinates are compared, so `S!A1:A1` is a single cell, in
    /// agreement with [`Range::cell_count`].
    pub fn is_single_cell(&self) -> bool {
        self.start.column() == self.end.column() && self.start.row() == self.end.row()
    }

    /// Iterate over all cells in the bounding box (row by row)
    ///
    /// Yielded cells carry the range's sheet and no anchors.
    pub fn cells(&self) -> RangeCells {
        let (min_col, min_row, max_col, max_row) = self.bounds();
        RangeCells {
            sheet: self.sheet().map(str::to_owned),
            min_col,
            max_col,
            max_row,
            current_row: min_row,
            current_col: min_col,
            remaining: self.cell_count(),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_address())
    }
}

impl FromStr for Range {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range
#[derive(Debug, Clone)]
pub struct RangeCells {
    sheet: Option<String>,
    min_col: u16,
    max_col: u16,
    max_row: u32,
    current_row: u32,
    current_col: u16,
    remaining: u64,
}

impl Iterator for RangeCells {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let cell = Cell::from_parts(
            self.current_col,
            self.current_row,
            self.sheet.clone(),
            Default::default(),
        );
        self.remaining -= 1;

        if self.current_col == self.max_col {
            self.current_col = self.min_col;
            // Stays put on the last row; `remaining` ends the walk
            if self.current_row < self.max_row {
                self.current_row += 1;
            }
        } else {
            self.current_col += 1;
        }

        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, usize::try_from(self.remaining).ok())
    }
}
