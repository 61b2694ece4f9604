//! Range validation options
//!
//! [`Range::new`](crate::Range::new) takes its two cells literally. Callers
//! that want sheet or ordering checks build ranges through
//! [`Range::with_policy`](crate::Range::with_policy) instead.

use crate::cell::Cell;
use crate::error::{Error, Result};

/// How the sheets of a range's two cells are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SheetPolicy {
    /// Accept any combination of sheets
    #[default]
    Unchecked,
    /// Reject cells on different sheets, and an end sheet without a start sheet
    Consistent,
}

/// How a range whose end lies before its start is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OrderPolicy {
    /// Keep the cells exactly as given
    #[default]
    AsGiven,
    /// Reorder coordinates so start is top-left and end is bottom-right
    Normalize,
    /// Fail with [`Error::ReversedRange`]
    Reject,
}

/// Options for building a [`Range`](crate::Range)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RangePolicy {
    /// Sheet consistency check (default: unchecked)
    pub sheets: SheetPolicy,
    /// Ordering rule (default: as given)
    pub order: OrderPolicy,
}

impl RangePolicy {
    /// Policy that applies no checks (same as [`Default`])
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Consistent sheets, reversed ranges rejected
    pub fn strict() -> Self {
        Self {
            sheets: SheetPolicy::Consistent,
            order: OrderPolicy::Reject,
        }
    }

    /// Set the sheet policy
    pub fn with_sheets(mut self, sheets: SheetPolicy) -> Self {
        self.sheets = sheets;
        self
    }

    /// Set the ordering policy
    pub fn with_order(mut self, order: OrderPolicy) -> Self {
        self.order = order;
        self
    }
}

/// Check that `start` and `end` may share a range under [`SheetPolicy::Consistent`]
///
/// A sheet only on the start cell is accepted: the end inherits it when the
/// range is read, but tools that fill ranges cell by cell may not.
pub(crate) fn check_sheets(start: &Cell, end: &Cell) -> Result<()> {
    match (start.sheet(), end.sheet()) {
        (Some(a), Some(b)) if a != b => Err(Error::SheetMismatch(format!(
            "range cannot span sheets '{}' and '{}'",
            a, b
        ))),
        (None, Some(b)) => Err(Error::SheetMismatch(format!(
            "end cell is on sheet '{}' but start cell has no sheet",
            b
        ))),
        (Some(a), None) => {
            tracing::warn!(
                sheet = a,
                "range end has no sheet; it will not be usable for autofill"
            );
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on(sheet: Option<&str>) -> Cell {
        Cell::new(0, 0, sheet).unwrap()
    }

    #[test]
    fn test_defaults() {
        let policy = RangePolicy::default();
        assert_eq!(policy.sheets, SheetPolicy::Unchecked);
        assert_eq!(policy.order, OrderPolicy::AsGiven);
        assert_eq!(policy, RangePolicy::lenient());
    }

    #[test]
    fn test_builder() {
        let policy = RangePolicy::lenient().with_order(OrderPolicy::Normalize);
        assert_eq!(policy.order, OrderPolicy::Normalize);
        assert_eq!(policy.sheets, SheetPolicy::Unchecked);
        assert_eq!(
            RangePolicy::strict(),
            RangePolicy::default()
                .with_sheets(SheetPolicy::Consistent)
                .with_order(OrderPolicy::Reject)
        );
    }

    #[test]
    fn test_check_sheets() {
        assert!(check_sheets(&on(None), &on(None)).is_ok());
        assert!(check_sheets(&on(Some("A")), &on(Some("A"))).is_ok());
        assert!(check_sheets(&on(Some("A")), &on(None)).is_ok());
        assert!(matches!(
            check_sheets(&on(Some("A")), &on(Some("B"))),
            Err(Error::SheetMismatch(_))
        ));
        assert!(matches!(
            check_sheets(&on(None), &on(Some("B"))),
            Err(Error::SheetMismatch(_))
        ));
    }
}
