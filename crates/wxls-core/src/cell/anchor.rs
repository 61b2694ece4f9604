//! Absolute reference markers

/// Which parts of a cell reference carry a `$` marker
///
/// Anchors only change how an address is written. `$A$1` and `A1` name the
/// same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AnchorStyle {
    /// Relative reference (`A1`)
    #[default]
    None,
    /// Absolute row (`A$1`)
    Row,
    /// Absolute column (`$A1`)
    Column,
    /// Absolute row and column (`$A$1`)
    All,
}

impl AnchorStyle {
    /// Build an anchor style from individual row/column flags
    pub fn from_flags(row_absolute: bool, col_absolute: bool) -> Self {
        match (row_absolute, col_absolute) {
            (false, false) => AnchorStyle::None,
            (true, false) => AnchorStyle::Row,
            (false, true) => AnchorStyle::Column,
            (true, true) => AnchorStyle::All,
        }
    }

    /// Whether the row reference is absolute ($)
    pub fn row_absolute(self) -> bool {
        matches!(self, AnchorStyle::Row | AnchorStyle::All)
    }

    /// Whether the column reference is absolute ($)
    pub fn col_absolute(self) -> bool {
        matches!(self, AnchorStyle::Column | AnchorStyle::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        for style in [
            AnchorStyle::None,
            AnchorStyle::Row,
            AnchorStyle::Column,
            AnchorStyle::All,
        ] {
            assert_eq!(
                AnchorStyle::from_flags(style.row_absolute(), style.col_absolute()),
                style
            );
        }
        assert!(AnchorStyle::Row.row_absolute());
        assert!(!AnchorStyle::Row.col_absolute());
    }
}
