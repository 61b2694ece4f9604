//! WASM binding tests
//!
//! Run with: wasm-pack test --node

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use wxls_wasm::*;

// =============================================================================
// Cell Tests
// =============================================================================

#[wasm_bindgen_test]
fn test_cell_new() {
    let cell = Cell::new(0.0, 0.0, None).unwrap();
    assert_eq!(cell.column(), 0);
    assert_eq!(cell.row(), 0);
    assert_eq!(cell.sheet(), None);
    assert_eq!(cell.to_str_address(), "A1");
}

#[wasm_bindgen_test]
fn test_cell_addresses() {
    assert_eq!(Cell::new(12.0, 12.0, None).unwrap().to_str_address(), "M13");
    assert_eq!(
        Cell::new(1.0, 1.0, Some("Sheet1".into()))
            .unwrap()
            .to_str_address(),
        "Sheet1!B2"
    );
    assert_eq!(
        Cell::new(100.0, 100.0, Some("Sheet1".into()))
            .unwrap()
            .to_str_address(),
        "Sheet1!CW101"
    );
}

#[wasm_bindgen_test]
fn test_cell_rejects_bad_coordinates() {
    assert!(Cell::new(-1.0, 0.0, None).is_err());
    assert!(Cell::new(0.0, -1.0, None).is_err());
    assert!(Cell::new(0.5, 0.0, None).is_err());
    assert!(Cell::new(f64::NAN, 0.0, None).is_err());
    assert!(Cell::new(16384.0, 0.0, None).is_err());
}

#[wasm_bindgen_test]
fn test_cell_anchor() {
    let cell = Cell::from_str_address("B1", None).unwrap();
    assert_eq!(cell.anchored(Anchor::All).to_str_address(), "$B$1");
    assert_eq!(cell.anchored(Anchor::Column).to_str_address(), "$B1");
    assert_eq!(cell.anchored(Anchor::Row).to_str_address(), "B$1");
    assert_eq!(cell.anchor(), Anchor::None);
}

#[wasm_bindgen_test]
fn test_cell_offset() {
    let cell = Cell::new(2.0, 1.0, None).unwrap();
    assert_eq!(cell.offset(2.0, 5.0).unwrap().to_str_address(), "H4");
    assert!(cell.offset(-2.0, 0.0).is_err());
}

// =============================================================================
// Range Tests
// =============================================================================

#[wasm_bindgen_test]
fn test_range_new() {
    let start = Cell::new(0.0, 0.0, None).unwrap();
    let end = Cell::new(12.0, 12.0, None).unwrap();
    let range = Range::new(&start, &end);

    assert_eq!(range.to_str_address(), "A1:M13");
    assert!(range.start().equals(&start));
    assert!(range.end().equals(&end));
}

#[wasm_bindgen_test]
fn test_range_has_and_include() {
    let range = Range::from_str_address("A1:B2").unwrap();
    assert!(range.has(&Cell::from_str_address("A2", None).unwrap()));
    assert!(!range.has(&Cell::from_str_address("C1", None).unwrap()));

    let grown = range
        .new_include(&Cell::from_str_address("C1", None).unwrap())
        .unwrap();
    assert_eq!(grown.to_str_address(), "A1:C2");
    assert_eq!(grown.row_count(), 2);
    assert_eq!(grown.col_count(), 3);
}

#[wasm_bindgen_test]
fn test_range_with_policy() {
    let a = Cell::new(0.0, 0.0, Some("Sheet1".into())).unwrap();
    let b = Cell::new(1.0, 1.0, Some("Sheet2".into())).unwrap();

    assert!(Range::with_policy(&a, &b, true, RangeOrder::AsGiven).is_err());
    assert!(Range::with_policy(&a, &b, false, RangeOrder::AsGiven).is_ok());
    assert!(Range::with_policy(&b, &a, false, RangeOrder::Reject).is_err());
}
