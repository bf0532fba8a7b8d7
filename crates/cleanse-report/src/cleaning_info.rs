//! The human-readable cleaning-information report.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use cleanse_model::{CleaningStats, Dataset};

const HEAD_ROWS: usize = 5;

fn ruler(title: &str) -> String {
    format!("{} {} {}", "=".repeat(30), title, "=".repeat(30))
}

fn count(value: Option<usize>) -> String {
    value.map_or_else(|| "not run".to_string(), |count| count.to_string())
}

/// Render the collected statistics, the column types of the cleaned table,
/// and a small leading sample into one text block.
pub fn render_cleaning_info(stats: &CleaningStats, table: &Dataset) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", ruler("Info"));
    let _ = writeln!(out, "  header duplicates:    {}", count(stats.n_double_headers));
    let _ = writeln!(out, "  removed nan rows:     {}", count(stats.n_nan_rows));
    let _ = writeln!(out, "  other row duplicates: {}", count(stats.n_duplicates));
    let _ = writeln!(out, "  removed outlier rows: {}", count(stats.n_outlier_rows));
    match &stats.whiskers {
        Some(whiskers) if whiskers.is_empty() => {
            let _ = writeln!(out, "  whiskers:             none");
        }
        Some(whiskers) => {
            let _ = writeln!(out, "  whiskers:");
            for (column, (lower, upper)) in whiskers {
                let _ = writeln!(out, "    {column}: ({lower}, {upper})");
            }
        }
        None => {
            let _ = writeln!(out, "  whiskers:             not run");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", ruler("column types"));
    for (idx, name) in table.columns.iter().enumerate() {
        let _ = writeln!(out, "  {name}: {}", table.column_kind(idx));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", ruler("head"));
    let _ = writeln!(out, "{}", render_head(table));
    out
}

fn render_head(table: &Dataset) -> Table {
    let mut head = Table::new();
    head.load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec!["#".to_string()];
    header.extend(table.columns.iter().cloned());
    head.set_header(header);
    for row in table.head(HEAD_ROWS) {
        let mut cells = vec![row.id.to_string()];
        cells.extend(row.cells.iter().map(|cell| cell.render()));
        head.add_row(cells);
    }
    head
}

/// Emit the report: write it to `target` when one is configured, otherwise
/// hand the block back to the caller — never both.
///
/// # Errors
///
/// Fails when the report file cannot be written.
pub fn emit_cleaning_info(
    stats: &CleaningStats,
    table: &Dataset,
    target: Option<&Path>,
) -> Result<Option<String>> {
    let report = render_cleaning_info(stats, table);
    match target {
        Some(path) => {
            fs::write(path, &report)
                .with_context(|| format!("write cleaning info to {}", path.display()))?;
            Ok(None)
        }
        None => Ok(Some(report)),
    }
}
