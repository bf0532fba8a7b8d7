//! Type coercion: per-column isolation for datetime/numeric targets,
//! hard failure for int/float targets.

use chrono::NaiveDate;

use cleanse_model::{Cell, CleaningSpec, ColumnKind, Dataset};
use cleanse_transform::{StageError, coerce_types, parse_flexible};

fn spec(json: &str) -> CleaningSpec {
    serde_json::from_str(json).expect("parse spec")
}

fn column(values: &[Option<&str>]) -> Vec<Cell> {
    values
        .iter()
        .map(|value| match value {
            Some(text) => Cell::Text((*text).to_string()),
            None => Cell::Missing,
        })
        .collect()
}

fn table(columns: &[(&str, Vec<Cell>)]) -> Dataset {
    let names = columns.iter().map(|(name, _)| (*name).to_string()).collect();
    let mut table = Dataset::new(names);
    let n_rows = columns[0].1.len();
    for row_idx in 0..n_rows {
        let cells = columns.iter().map(|(_, cells)| cells[row_idx].clone()).collect();
        table.push_row(cells);
    }
    table
}

#[test]
fn flexible_parse_accepts_common_formats() {
    let expected = NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(parse_flexible("2024-03-05"), Some(expected));
    assert_eq!(parse_flexible("05.03.2024"), Some(expected));
    assert_eq!(parse_flexible("03/05/2024"), Some(expected));
    assert_eq!(parse_flexible("2024/03/05"), Some(expected));
    assert_eq!(parse_flexible(" 2024-03-05 "), Some(expected));
    assert!(parse_flexible("2024-03-05T10:30").is_some());
    assert!(parse_flexible("2024-03-05 10:30:15").is_some());
    assert_eq!(parse_flexible("yesterday"), None);
    assert_eq!(parse_flexible(""), None);
}

#[test]
fn datetime_column_converts_and_keeps_missing() {
    let mut data = table(&[("when", column(&[Some("2024-01-02"), None]))]);
    let spec = spec(r#"{"input_file": "d.csv", "datetime_col": ["when"]}"#);

    coerce_types(&mut data, &spec).expect("coerce");
    assert_eq!(data.column_kind(0), ColumnKind::DateTime);
    assert_eq!(data.rows[1].cells[0], Cell::Missing);
}

#[test]
fn one_bad_datetime_column_does_not_abort_the_others() {
    let mut data = table(&[
        ("good", column(&[Some("2024-01-02")])),
        ("bad", column(&[Some("not a date")])),
    ]);
    let spec = spec(r#"{"input_file": "d.csv", "datetime_col": ["bad", "good"]}"#);

    coerce_types(&mut data, &spec).expect("coerce");
    assert_eq!(data.column_kind(0), ColumnKind::DateTime);
    // The bad column is left untouched, not half-converted.
    assert_eq!(data.rows[0].cells[1], Cell::Text("not a date".to_string()));
}

#[test]
fn int_coercion_truncates_toward_zero() {
    let mut data = table(&[("n", column(&[Some("3.7"), Some("-2.9"), Some("8")]))]);
    let spec = spec(r#"{"input_file": "d.csv", "int_col": ["n"]}"#);

    coerce_types(&mut data, &spec).expect("coerce");
    let values: Vec<Cell> = data.column_cells(0).cloned().collect();
    assert_eq!(values, vec![Cell::Int(3), Cell::Int(-2), Cell::Int(8)]);
}

#[test]
fn missing_value_in_int_column_is_fatal() {
    let mut data = table(&[("n", column(&[Some("1"), None]))]);
    let spec = spec(r#"{"input_file": "d.csv", "int_col": ["n"]}"#);

    let err = coerce_types(&mut data, &spec).unwrap_err();
    assert!(matches!(err, StageError::Coercion { .. }));
}

#[test]
fn unknown_int_column_is_fatal_not_a_warning() {
    let mut data = table(&[("n", column(&[Some("1")]))]);
    let spec = spec(r#"{"input_file": "d.csv", "int_col": ["ghost"]}"#);

    let err = coerce_types(&mut data, &spec).unwrap_err();
    assert!(matches!(err, StageError::MissingColumn(name) if name == "ghost"));
}

#[test]
fn float_coercion_keeps_missing_cells() {
    let mut data = table(&[("x", column(&[Some("1.25"), None]))]);
    let spec = spec(r#"{"input_file": "d.csv", "float_col": ["x"]}"#);

    coerce_types(&mut data, &spec).expect("coerce");
    assert_eq!(data.rows[0].cells[0], Cell::Float(1.25));
    assert_eq!(data.rows[1].cells[0], Cell::Missing);
}

#[test]
fn non_numeric_float_column_is_fatal() {
    let mut data = table(&[("x", column(&[Some("abc")]))]);
    let spec = spec(r#"{"input_file": "d.csv", "float_col": ["x"]}"#);

    let err = coerce_types(&mut data, &spec).unwrap_err();
    assert!(matches!(err, StageError::Coercion { .. }));
}

#[test]
fn numeric_column_prefers_int_when_everything_is_integral() {
    let mut data = table(&[("n", column(&[Some("1"), Some("2")]))]);
    let spec = spec(r#"{"input_file": "d.csv", "numeric_col": ["n"]}"#);

    coerce_types(&mut data, &spec).expect("coerce");
    assert_eq!(data.column_kind(0), ColumnKind::Int);
}

#[test]
fn numeric_column_with_missing_becomes_float() {
    let mut data = table(&[("n", column(&[Some("1"), None]))]);
    let spec = spec(r#"{"input_file": "d.csv", "numeric_col": ["n"]}"#);

    coerce_types(&mut data, &spec).expect("coerce");
    assert_eq!(data.column_kind(0), ColumnKind::Float);
    assert_eq!(data.rows[0].cells[0], Cell::Float(1.0));
    assert_eq!(data.rows[1].cells[0], Cell::Missing);
}

#[test]
fn unparseable_numeric_column_is_left_as_is() {
    let mut data = table(&[("n", column(&[Some("1"), Some("two")]))]);
    let spec = spec(r#"{"input_file": "d.csv", "numeric_col": ["n"]}"#);

    coerce_types(&mut data, &spec).expect("coerce");
    assert_eq!(data.rows[1].cells[0], Cell::Text("two".to_string()));
}
