//! Terminal summary of a pipeline run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Removed"),
        header_cell("Rows"),
    ]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table.add_row(vec![
        Cell::new("loaded"),
        dim_cell("-"),
        Cell::new(result.rows_before),
    ]);
    table.add_row(vec![
        Cell::new("header duplicates"),
        count_cell(result.stats.n_double_headers),
        dim_cell(""),
    ]);
    table.add_row(vec![
        Cell::new("nan rows"),
        count_cell(result.stats.n_nan_rows),
        dim_cell(""),
    ]);
    table.add_row(vec![
        Cell::new("row duplicates"),
        count_cell(result.stats.n_duplicates),
        dim_cell(""),
    ]);
    table.add_row(vec![
        Cell::new("outlier rows"),
        count_cell(result.stats.n_outlier_rows),
        dim_cell(""),
    ]);
    table.add_row(vec![
        Cell::new("cleaned").add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(result.rows_after).add_attribute(Attribute::Bold),
    ]);
    println!(
        "Columns: {before} -> {after}",
        before = result.columns_before,
        after = result.columns_after
    );
    println!("{table}");

    if let Some(path) = &result.output_file {
        println!("Cleaned data: {}", path.display());
    }
    if let Some(path) = &result.info_file {
        println!("Cleaning info: {}", path.display());
    }
    if let Some(report) = &result.report {
        println!();
        println!("{report}");
    }
    if let Some(error) = &result.export_error {
        eprintln!("warning: export failed: {error}");
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: Option<usize>) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(Color::Yellow),
        Some(value) => Cell::new(value),
        None => dim_cell("not run"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
