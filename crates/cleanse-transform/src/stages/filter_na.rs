//! NaN-row filtering, the pipeline's subtlest policy.

use tracing::{debug, warn};

use cleanse_model::{CleaningSpec, CleaningStats, Dataset};

use crate::resolve::resolve_columns;

fn column_indices(table: &Dataset, names: &[String]) -> Vec<usize> {
    names
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect()
}

/// Drop rows containing nulls according to the `all`/`any` groups.
///
/// Case selection keys on the configured groups before resolution, in
/// this precedence order:
/// 1. master switch off: no-op, statistic stays unset;
/// 2. `all` empty: drop rows with at least one null among the resolved
///    `any` columns;
/// 3. `any` empty: drop rows where every resolved `all` column is null;
/// 4. both configured: drop a row iff every `all` column is null AND at
///    least one `any` column is null — the conjunction of the two
///    predicates, not their union.
///
/// Empty resolved groups follow the quantifiers: `all` over nothing is
/// vacuously true, `any` over nothing is false.
pub fn drop_nan_rows(table: &mut Dataset, stats: &mut CleaningStats, spec: &CleaningSpec) {
    if stats.n_nan_rows.is_some() {
        warn!("nan rows are already removed");
        return;
    }
    if !spec.drop_na {
        debug!("nan-row filtering not activated");
        return;
    }

    let groups = &spec.drop_na_how;
    let before = table.n_rows();

    if groups.all.is_empty() {
        let resolved = resolve_columns(&groups.any, &table.columns);
        let indices = column_indices(table, &resolved);
        table.retain_rows(|row| !indices.iter().any(|&idx| row.cells[idx].is_missing()));
    } else if groups.any.is_empty() {
        let resolved = resolve_columns(&groups.all, &table.columns);
        let indices = column_indices(table, &resolved);
        table.retain_rows(|row| !indices.iter().all(|&idx| row.cells[idx].is_missing()));
    } else {
        let all_indices = column_indices(table, &resolve_columns(&groups.all, &table.columns));
        let any_indices = column_indices(table, &resolve_columns(&groups.any, &table.columns));
        table.retain_rows(|row| {
            let fully_null = all_indices.iter().all(|&idx| row.cells[idx].is_missing());
            let partially_null = any_indices.iter().any(|&idx| row.cells[idx].is_missing());
            !(fully_null && partially_null)
        });
    }

    let removed = before - table.n_rows();
    stats.n_nan_rows = Some(removed);
    debug!(removed, "nan rows removed");
}
