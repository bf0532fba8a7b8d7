//! Statistical profile of a dataset.
//!
//! Produced twice per run when profiling is enabled: once for the table as
//! loaded and once for the cleaned result, so the two files can be compared
//! side by side.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell as TableCell, CellAlignment, ContentArrangement, Table};

use cleanse_model::{Cell, ColumnKind, Dataset};

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProfile {
    pub name: String,
    pub kind: ColumnKind,
    pub non_null: usize,
    pub null_ratio: f64,
    pub distinct: usize,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub title: String,
    pub n_rows: usize,
    pub columns: Vec<ColumnProfile>,
}

impl Profile {
    pub fn new(table: &Dataset, title: &str) -> Self {
        let n_rows = table.n_rows();
        let columns = table
            .columns
            .iter()
            .enumerate()
            .map(|(idx, name)| profile_column(table, idx, name))
            .collect();
        Self {
            title: title.to_string(),
            n_rows,
            columns,
        }
    }

    pub fn render(&self) -> String {
        let mut body = Table::new();
        body.load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic);
        body.set_header(vec![
            "column", "kind", "non-null", "null ratio", "distinct", "min", "max",
        ]);
        for column in 2..=6 {
            if let Some(col) = body.column_mut(column) {
                col.set_cell_alignment(CellAlignment::Right);
            }
        }
        for profile in &self.columns {
            body.add_row(vec![
                TableCell::new(&profile.name),
                TableCell::new(profile.kind),
                TableCell::new(profile.non_null),
                TableCell::new(format!("{:.2}", profile.null_ratio)),
                TableCell::new(profile.distinct),
                TableCell::new(render_bound(profile.minimum)),
                TableCell::new(render_bound(profile.maximum)),
            ]);
        }
        format!(
            "{title}\n{rows} rows x {cols} columns\n\n{body}\n",
            title = self.title,
            rows = self.n_rows,
            cols = self.columns.len(),
        )
    }

    /// Write the rendered profile to a file.
    ///
    /// # Errors
    ///
    /// Fails when the target cannot be written.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())
            .with_context(|| format!("write profile {:?} to {}", self.title, path.display()))
    }
}

fn render_bound(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |bound| bound.to_string())
}

fn profile_column(table: &Dataset, idx: usize, name: &str) -> ColumnProfile {
    let kind = table.column_kind(idx);
    let mut non_null = 0usize;
    let mut distinct = BTreeSet::new();
    for cell in table.column_cells(idx) {
        if cell.is_missing() {
            continue;
        }
        non_null += 1;
        distinct.insert(cell.dedup_key());
    }
    let null_ratio = if table.n_rows() == 0 {
        1.0
    } else {
        (table.n_rows() - non_null) as f64 / table.n_rows() as f64
    };

    let numeric = matches!(kind, ColumnKind::Int | ColumnKind::Float);
    let mut minimum = None;
    let mut maximum = None;
    if numeric {
        for value in table.column_cells(idx).filter_map(Cell::as_f64) {
            minimum = Some(minimum.map_or(value, |m: f64| m.min(value)));
            maximum = Some(maximum.map_or(value, |m: f64| m.max(value)));
        }
    }

    ColumnProfile {
        name: name.to_string(),
        kind,
        non_null,
        null_ratio,
        distinct: distinct.len(),
        minimum,
        maximum,
    }
}
