//! NaN-row filtering semantics, including the deliberate conjunction in
//! the combined case.

use cleanse_model::{Cell, CleaningSpec, CleaningStats, Dataset};
use cleanse_transform::drop_nan_rows;

fn spec(json: &str) -> CleaningSpec {
    serde_json::from_str(json).expect("parse spec")
}

fn cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) => Cell::Text(text.to_string()),
        None => Cell::Missing,
    }
}

/// Two-column table from (a, b) value pairs; None is a null.
fn table(rows: &[(Option<&str>, Option<&str>)]) -> Dataset {
    let mut table = Dataset::new(vec!["a".to_string(), "b".to_string()]);
    for (a, b) in rows {
        table.push_row(vec![cell(*a), cell(*b)]);
    }
    table
}

#[test]
fn master_switch_off_is_a_no_op() {
    let mut data = table(&[(None, None), (Some("x"), None)]);
    let mut stats = CleaningStats::default();
    let spec = spec(r#"{"input_file": "d.csv", "drop_na": false}"#);

    drop_nan_rows(&mut data, &mut stats, &spec);
    assert_eq!(data.n_rows(), 2);
    assert_eq!(stats.n_nan_rows, None);
}

#[test]
fn any_semantics_drop_rows_with_one_null() {
    let mut data = table(&[
        (Some("1"), Some("2")),
        (None, Some("2")),
        (Some("1"), None),
        (None, None),
    ]);
    let mut stats = CleaningStats::default();
    let spec = spec(
        r#"{"input_file": "d.csv", "drop_na": true,
            "drop_na_how": {"all": [], "any": ["a", "b"]}}"#,
    );

    drop_nan_rows(&mut data, &mut stats, &spec);
    assert_eq!(data.n_rows(), 1);
    assert_eq!(stats.n_nan_rows, Some(3));
}

#[test]
fn all_semantics_drop_only_fully_null_rows() {
    let mut data = table(&[
        (Some("1"), Some("2")),
        (None, Some("2")),
        (None, None),
    ]);
    let mut stats = CleaningStats::default();
    let spec = spec(
        r#"{"input_file": "d.csv", "drop_na": true,
            "drop_na_how": {"all": ["a", "b"], "any": []}}"#,
    );

    drop_nan_rows(&mut data, &mut stats, &spec);
    assert_eq!(data.n_rows(), 2);
    assert_eq!(stats.n_nan_rows, Some(1));
}

#[test]
fn combined_case_is_a_conjunction_not_a_union() {
    // all=["a"], any=["b"]: a row is dropped iff a is null AND b is null.
    let mut data = table(&[
        (None, None),       // dropped: both predicates hold
        (None, Some("2")),  // kept: any-group has no null
        (Some("1"), None),  // kept: all-group is not fully null
        (Some("1"), Some("2")),
    ]);
    let mut stats = CleaningStats::default();
    let spec = spec(
        r#"{"input_file": "d.csv", "drop_na": true,
            "drop_na_how": {"all": ["a"], "any": ["b"]}}"#,
    );

    drop_nan_rows(&mut data, &mut stats, &spec);
    assert_eq!(stats.n_nan_rows, Some(1));
    // The union reading would have removed three rows; only the first goes.
    assert_eq!(data.n_rows(), 3);
    assert_eq!(data.rows[0].cells[0], Cell::Missing);
    assert_eq!(data.rows[0].cells[1], Cell::Text("2".to_string()));
}

#[test]
fn empty_any_group_after_resolution_drops_nothing() {
    // any(∅) is false: no row can satisfy "at least one null".
    let mut data = table(&[(None, None), (Some("1"), None)]);
    let mut stats = CleaningStats::default();
    let spec = spec(
        r#"{"input_file": "d.csv", "drop_na": true,
            "drop_na_how": {"all": [], "any": ["ghost"]}}"#,
    );

    drop_nan_rows(&mut data, &mut stats, &spec);
    assert_eq!(data.n_rows(), 2);
    assert_eq!(stats.n_nan_rows, Some(0));
}

#[test]
fn empty_all_group_after_resolution_drops_every_row() {
    // all(∅) is vacuously true, so every row counts as fully null.
    let mut data = table(&[(Some("1"), Some("2")), (Some("3"), Some("4"))]);
    let mut stats = CleaningStats::default();
    let spec = spec(
        r#"{"input_file": "d.csv", "drop_na": true,
            "drop_na_how": {"all": ["ghost"], "any": []}}"#,
    );

    drop_nan_rows(&mut data, &mut stats, &spec);
    assert_eq!(data.n_rows(), 0);
    assert_eq!(stats.n_nan_rows, Some(2));
}

#[test]
fn second_invocation_is_a_warned_no_op() {
    let mut data = table(&[(None, Some("2")), (Some("1"), Some("2"))]);
    let mut stats = CleaningStats::default();
    let spec = spec(
        r#"{"input_file": "d.csv", "drop_na": true,
            "drop_na_how": {"all": [], "any": ["a"]}}"#,
    );

    drop_nan_rows(&mut data, &mut stats, &spec);
    assert_eq!(stats.n_nan_rows, Some(1));

    let snapshot = data.clone();
    drop_nan_rows(&mut data, &mut stats, &spec);
    assert_eq!(stats.n_nan_rows, Some(1));
    assert_eq!(data, snapshot);
}
