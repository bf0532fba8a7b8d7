//! Rendering of the cleaning-information report and dataset profiles.

use std::collections::BTreeMap;

use cleanse_model::{Cell, CleaningStats, ColumnKind, Dataset};
use cleanse_report::{Profile, emit_cleaning_info, render_cleaning_info};

fn sample_table() -> Dataset {
    let mut table = Dataset::new(vec!["name".to_string(), "value".to_string()]);
    table.push_row(vec![Cell::Text("ana".to_string()), Cell::Float(1.5)]);
    table.push_row(vec![Cell::Text("ben".to_string()), Cell::Float(4.0)]);
    table.push_row(vec![Cell::Missing, Cell::Float(2.5)]);
    table
}

#[test]
fn unset_statistics_render_as_not_run() {
    let report = render_cleaning_info(&CleaningStats::default(), &sample_table());
    assert!(report.contains("header duplicates:    not run"));
    assert!(report.contains("whiskers:             not run"));
}

#[test]
fn set_statistics_render_their_counts_and_whiskers() {
    let mut whiskers = BTreeMap::new();
    whiskers.insert("value".to_string(), (-3.5, 14.5));
    let stats = CleaningStats {
        n_double_headers: Some(1),
        n_nan_rows: Some(2),
        n_duplicates: Some(0),
        n_outlier_rows: Some(3),
        whiskers: Some(whiskers),
    };

    let report = render_cleaning_info(&stats, &sample_table());
    assert!(report.contains("header duplicates:    1"));
    assert!(report.contains("removed nan rows:     2"));
    assert!(report.contains("other row duplicates: 0"));
    assert!(report.contains("removed outlier rows: 3"));
    assert!(report.contains("value: (-3.5, 14.5)"));
}

#[test]
fn report_lists_column_types_and_head_sample() {
    let report = render_cleaning_info(&CleaningStats::default(), &sample_table());
    assert!(report.contains("name: text"));
    assert!(report.contains("value: float"));
    assert!(report.contains("ana"));
    assert!(report.contains("1.5"));
}

#[test]
fn emit_writes_file_or_returns_string_never_both() {
    let dir = tempfile::tempdir().expect("tempdir");
    let table = sample_table();
    let stats = CleaningStats::default();

    let path = dir.path().join("info.txt");
    let written = emit_cleaning_info(&stats, &table, Some(&path)).expect("emit to file");
    assert!(written.is_none());
    let on_disk = std::fs::read_to_string(&path).expect("read info file");
    assert!(on_disk.contains("not run"));

    let returned = emit_cleaning_info(&stats, &table, None).expect("emit to string");
    assert_eq!(returned, Some(on_disk));
}

#[test]
fn profile_summarizes_columns() {
    let profile = Profile::new(&sample_table(), "Origin");
    assert_eq!(profile.n_rows, 3);

    let name = &profile.columns[0];
    assert_eq!(name.kind, ColumnKind::Text);
    assert_eq!(name.non_null, 2);
    assert!((name.null_ratio - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(name.distinct, 2);
    assert_eq!(name.minimum, None);

    let value = &profile.columns[1];
    assert_eq!(value.kind, ColumnKind::Float);
    assert_eq!(value.minimum, Some(1.5));
    assert_eq!(value.maximum, Some(4.0));
}

#[test]
fn profile_write_round_trips_to_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("profile.txt");
    let profile = Profile::new(&sample_table(), "Cleaned");
    profile.write(&path).expect("write profile");

    let on_disk = std::fs::read_to_string(&path).expect("read profile");
    assert!(on_disk.starts_with("Cleaned\n3 rows x 2 columns"));
    assert!(on_disk.contains("name"));
    assert!(on_disk.contains("0.33"));
}
