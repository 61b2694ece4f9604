//! End-to-end tests for cell and range addressing through the public API

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wxls::prelude::*;

/// The cells and range shown on the demo page
#[test]
fn test_demo_addresses() {
    let cell11 = Cell::new(0, 0, None).unwrap();
    let cell12 = Cell::new(12, 12, None).unwrap();
    assert_eq!(
        format!(
            "Defined 2 different cells {} and {}",
            cell11.to_str_address(),
            cell12.to_str_address()
        ),
        "Defined 2 different cells A1 and M13"
    );

    let cell21 = Cell::new(1, 1, Some("Sheet1")).unwrap();
    let cell22 = Cell::new(100, 100, Some("Sheet1")).unwrap();
    assert_eq!(cell21.to_str_address(), "Sheet1!B2");
    assert_eq!(cell22.to_str_address(), "Sheet1!CW101");

    let range = Range::new(cell11.clone(), cell12.clone());
    assert_eq!(range.to_str_address(), "A1:M13");

    // The range copied its cells; the originals are untouched
    assert_eq!(cell11.to_str_address(), "A1");
    assert_eq!(range.start(), &cell11);
}

#[test]
fn test_column_boundaries() {
    let cases = [
        (0, "A1"),
        (25, "Z1"),
        (26, "AA1"),
        (51, "AZ1"),
        (52, "BA1"),
        (701, "ZZ1"),
        (702, "AAA1"),
        (16383, "XFD1"),
    ];
    for (column, expected) in cases {
        assert_eq!(Cell::new(column, 0, None).unwrap().to_str_address(), expected);
    }
}

#[test]
fn test_invalid_coordinates() {
    for (column, row) in [(-1, 0), (0, -1), (-10, -10), (16384, 0), (0, 1_048_576)] {
        assert_eq!(
            Cell::new(column, row, None),
            Err(Error::InvalidCoordinate { column, row })
        );
    }
}

#[test]
fn test_parsed_out_of_grid_matches_new() {
    let cases = [
        ("XFE1", 16384, 0),
        ("A1048577", 0, 1_048_576),
        ("XFE1048577", 16384, 1_048_576),
    ];
    for (text, column, row) in cases {
        assert_eq!(text.parse::<Cell>(), Cell::new(column, row, None));
        assert_eq!(
            text.parse::<Cell>(),
            Err(Error::InvalidCoordinate { column, row })
        );
    }
}

#[test]
fn test_error_messages() {
    let err = Cell::new(0, 0, Some("a/b")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid sheet name: Sheet name cannot contain '/'");

    let err = Cell::new(0, 0, Some(" Data")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid sheet name: Sheet name cannot start or end with whitespace"
    );

    let err = "A0".parse::<Cell>().unwrap_err();
    assert_eq!(err.to_string(), "Invalid cell address: row number must be >= 1 in 'A0'");
}

#[test]
fn test_strict_policy_workflow() {
    let policy = RangePolicy::strict();

    let ok = Range::with_policy(
        "Data!A1".parse().unwrap(),
        "Data!D10".parse().unwrap(),
        &policy,
    )
    .unwrap();
    assert_eq!(ok.to_string(), "Data!A1:Data!D10");
    assert_eq!(ok.cell_count(), 40);

    let grown = ok.including(&"Data!F2".parse().unwrap()).unwrap();
    assert_eq!(grown.to_string(), "Data!A1:Data!F10");

    let err = Range::with_policy(
        "Data!A1".parse().unwrap(),
        "Other!D10".parse().unwrap(),
        &policy,
    )
    .unwrap_err();
    assert!(matches!(err, Error::SheetMismatch(_)));
}

#[test]
fn test_normalize_then_iterate() {
    let policy = RangePolicy::lenient().with_order(OrderPolicy::Normalize);
    let range = Range::with_policy(
        Cell::new(1, 2, None).unwrap(),
        Cell::new(0, 1, None).unwrap(),
        &policy,
    )
    .unwrap();
    assert_eq!(range.to_str_address(), "A2:B3");

    let visited: Vec<String> = range.cells().map(|c| c.to_str_address()).collect();
    assert_eq!(visited, vec!["A2", "B2", "A3", "B3"]);
    assert!(range.cells().all(|c| range.contains(&c)));
}

/// Sheet names with interior spaces but none at either edge
const SHEET_NAME: &str = "[A-Za-z0-9_]([A-Za-z0-9 _]{0,29}[A-Za-z0-9_])?";

proptest! {
    #[test]
    fn range_address_is_colon_joined(
        c1 in 0i64..16384, r1 in 0i64..1_048_576,
        c2 in 0i64..16384, r2 in 0i64..1_048_576,
        s1 in proptest::option::of(SHEET_NAME),
        s2 in proptest::option::of(SHEET_NAME),
    ) {
        let start = Cell::new(c1, r1, s1.as_deref()).unwrap();
        let end = Cell::new(c2, r2, s2.as_deref()).unwrap();
        let expected = format!("{}:{}", start.to_str_address(), end.to_str_address());
        let range = Range::new(start, end);
        prop_assert_eq!(range.to_str_address(), expected.clone());
        prop_assert_eq!(expected.parse::<Range>().unwrap(), range);
    }

    #[test]
    fn negative_coordinates_fail(c in i64::MIN..0, r in 0i64..1_048_576) {
        prop_assert!(Cell::new(c, r, None).is_err());
        prop_assert!(Cell::new(r.min(16383), c, None).is_err());
    }
}
