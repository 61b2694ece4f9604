//! WebAssembly bindings for wxls
//!
//! This module provides wasm-bindgen-based WebAssembly bindings for the wxls
//! coordinate types, allowing JavaScript/TypeScript code to build cells and
//! ranges and format their addresses.
//!
//! ```js
//! import init, { Cell, Range } from "./pkg";
//!
//! await init();
//! const a1 = new Cell(0, 0, undefined);
//! const m13 = new Cell(12, 12, undefined);
//! new Range(a1, m13).to_str_address(); // "A1:M13"
//! ```
//!
//! Nothing here may be called before `init()` resolves; afterwards every
//! call is synchronous.

use wasm_bindgen::prelude::*;

use wxls_core::{
    AnchorStyle, Cell as CoreCell, OrderPolicy, Range as CoreRange, RangePolicy, SheetPolicy,
};

// =============================================================================
// Error Conversion
// =============================================================================

fn to_js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

/// JS numbers arrive as doubles; only finite whole numbers are coordinates
fn to_index(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

fn coordinate(column: f64, row: f64) -> Result<(i64, i64), JsError> {
    match (to_index(column), to_index(row)) {
        (Some(column), Some(row)) => Ok((column, row)),
        _ => Err(JsError::new(&format!(
            "Invalid coordinate: column {}, row {} must be whole numbers",
            column, row
        ))),
    }
}

// =============================================================================
// Anchor
// =============================================================================

/// Which parts of a reference carry a `$` marker
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    None = 0,
    Row = 1,
    Column = 2,
    All = 3,
}

impl From<Anchor> for AnchorStyle {
    fn from(anchor: Anchor) -> Self {
        match anchor {
            Anchor::None => AnchorStyle::None,
            Anchor::Row => AnchorStyle::Row,
            Anchor::Column => AnchorStyle::Column,
            Anchor::All => AnchorStyle::All,
        }
    }
}

impl From<AnchorStyle> for Anchor {
    fn from(style: AnchorStyle) -> Self {
        match style {
            AnchorStyle::None => Anchor::None,
            AnchorStyle::Row => Anchor::Row,
            AnchorStyle::Column => Anchor::Column,
            AnchorStyle::All => Anchor::All,
        }
    }
}

/// How a reversed range is handled by `Range.withPolicy`
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeOrder {
    AsGiven = 0,
    Normalize = 1,
    Reject = 2,
}

// =============================================================================
// Cell
// =============================================================================

/// A single spreadsheet coordinate
#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct Cell {
    inner: CoreCell,
}

#[wasm_bindgen]
impl Cell {
    /// `new Cell(column, row, sheet?)` with 0-based indices
    #[wasm_bindgen(constructor)]
    pub fn new(column: f64, row: f64, sheet: Option<String>) -> Result<Cell, JsError> {
        let (column, row) = coordinate(column, row)?;
        let inner = CoreCell::new(column, row, sheet.as_deref()).map_err(to_js_error)?;
        Ok(Cell { inner })
    }

    /// Parse `A1`, `$B$2` or `Sheet1!C3`
    pub fn from_str_address(address: &str, sheet: Option<String>) -> Result<Cell, JsError> {
        let inner = CoreCell::parse(address, sheet.as_deref()).map_err(to_js_error)?;
        Ok(Cell { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn column(&self) -> u16 {
        self.inner.column()
    }

    #[wasm_bindgen(getter)]
    pub fn row(&self) -> u32 {
        self.inner.row()
    }

    #[wasm_bindgen(getter)]
    pub fn sheet(&self) -> Option<String> {
        self.inner.sheet().map(str::to_owned)
    }

    #[wasm_bindgen(getter)]
    pub fn anchor(&self) -> Anchor {
        self.inner.anchor().into()
    }

    /// Copy of this cell written with the given `$` markers
    pub fn anchored(&self, anchor: Anchor) -> Cell {
        Cell {
            inner: self.inner.anchored(anchor.into()),
        }
    }

    /// Copy of this cell moved by `rows` and `columns`
    pub fn offset(&self, rows: f64, columns: f64) -> Result<Cell, JsError> {
        let (columns, rows) = coordinate(columns, rows)?;
        let inner = self.inner.offset(rows, columns).map_err(to_js_error)?;
        Ok(Cell { inner })
    }

    pub fn to_str_address(&self) -> String {
        self.inner.to_str_address()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_js(&self) -> String {
        self.inner.to_str_address()
    }

    pub fn equals(&self, other: &Cell) -> bool {
        self.inner == other.inner
    }
}

// =============================================================================
// Range
// =============================================================================

/// A pair of cells, formatted as `start:end`
#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct Range {
    inner: CoreRange,
}

#[wasm_bindgen]
impl Range {
    /// `new Range(start, end)`; both cells are copied
    #[wasm_bindgen(constructor)]
    pub fn new(start: &Cell, end: &Cell) -> Range {
        Range {
            inner: CoreRange::new(start.inner.clone(), end.inner.clone()),
        }
    }

    /// Build a range with sheet and ordering checks
    #[wasm_bindgen(js_name = withPolicy)]
    pub fn with_policy(
        start: &Cell,
        end: &Cell,
        consistent_sheets: bool,
        order: RangeOrder,
    ) -> Result<Range, JsError> {
        let policy = RangePolicy {
            sheets: if consistent_sheets {
                SheetPolicy::Consistent
            } else {
                SheetPolicy::Unchecked
            },
            order: match order {
                RangeOrder::AsGiven => OrderPolicy::AsGiven,
                RangeOrder::Normalize => OrderPolicy::Normalize,
                RangeOrder::Reject => OrderPolicy::Reject,
            },
        };

        let inner = CoreRange::with_policy(start.inner.clone(), end.inner.clone(), &policy)
            .map_err(to_js_error)?;
        Ok(Range { inner })
    }

    /// Parse `A1:B2` or `Sheet1!A1:Sheet1!B2`
    pub fn from_str_address(address: &str) -> Result<Range, JsError> {
        let inner = CoreRange::parse(address).map_err(to_js_error)?;
        Ok(Range { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn start(&self) -> Cell {
        Cell {
            inner: self.inner.start().clone(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn end(&self) -> Cell {
        Cell {
            inner: self.inner.end().clone(),
        }
    }

    pub fn to_str_address(&self) -> String {
        self.inner.to_str_address()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_js(&self) -> String {
        self.inner.to_str_address()
    }

    /// Whether `cell` lies inside this range on the same sheet
    pub fn has(&self, cell: &Cell) -> bool {
        self.inner.contains(&cell.inner)
    }

    /// Smallest range covering this range and `cell`
    pub fn new_include(&self, cell: &Cell) -> Result<Range, JsError> {
        let inner = self.inner.including(&cell.inner).map_err(to_js_error)?;
        Ok(Range { inner })
    }

    #[wasm_bindgen(getter, js_name = rowCount)]
    pub fn row_count(&self) -> u32 {
        self.inner.row_count()
    }

    #[wasm_bindgen(getter, js_name = colCount)]
    pub fn col_count(&self) -> u16 {
        self.inner.col_count()
    }
}
