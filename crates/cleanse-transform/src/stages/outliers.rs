//! IQR outlier removal.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use cleanse_model::{Cell, CleaningSpec, CleaningStats, Dataset};

use crate::resolve::resolve_columns;

/// Linear-interpolation quantile over sorted values: position q·(n−1).
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Drop rows outside the IQR whiskers of the resolved columns.
///
/// Bounds for every column are computed first, from the table before any
/// column's filter is applied; the filters then run column by column, each
/// narrowing the surviving rows fed to the next. Recomputing bounds per
/// intermediate table would tighten them, which is not what this stage
/// promises. Rows whose cell has no numeric reading fail the filter.
pub fn drop_outliers(table: &mut Dataset, stats: &mut CleaningStats, spec: &CleaningSpec) {
    if stats.whiskers.is_some() {
        warn!("outliers are already removed");
        return;
    }

    let before = table.n_rows();
    let columns = resolve_columns(&spec.outliers_col, &table.columns);

    let mut whiskers = BTreeMap::new();
    for name in &columns {
        let Some(idx) = table.column_index(name) else {
            continue;
        };
        let mut values: Vec<f64> = table.column_cells(idx).filter_map(Cell::as_f64).collect();
        if values.is_empty() {
            warn!(column = %name, "no numeric values; skipping outlier bounds");
            continue;
        }
        values.sort_by(f64::total_cmp);
        let q1 = quantile(&values, 0.25);
        let q3 = quantile(&values, 0.75);
        let iqr = q3 - q1;
        whiskers.insert(name.clone(), (q1 - iqr * 1.5, q3 + iqr * 1.5));
    }

    for name in &columns {
        let Some(&(lower, upper)) = whiskers.get(name) else {
            continue;
        };
        let Some(idx) = table.column_index(name) else {
            continue;
        };
        table.retain_rows(|row| match row.cells[idx].as_f64() {
            Some(value) => value >= lower && value <= upper,
            None => false,
        });
    }

    let removed = before - table.n_rows();
    stats.n_outlier_rows = Some(removed);
    stats.whiskers = Some(whiskers);
    debug!(removed, "outlier rows removed");
}
