//! Removal of rows that repeat the header.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use cleanse_model::{CleaningSpec, CleaningStats, Dataset};

/// Drop every row whose values equal the column-name sequence exactly,
/// in one batch. A row matches only when each cell reads as text equal to
/// the column name at the same position.
pub fn drop_double_headers(table: &mut Dataset, stats: &mut CleaningStats, spec: &CleaningSpec) {
    if stats.n_double_headers.is_some() {
        warn!("header duplicates are already removed");
        return;
    }
    if !spec.drop_double_headers {
        debug!("header duplicate removal not activated");
        return;
    }

    let mut drop_ids = BTreeSet::new();
    for row in &table.rows {
        let is_header = row
            .cells
            .iter()
            .zip(&table.columns)
            .all(|(cell, name)| cell.as_text() == Some(name.as_str()));
        if is_header {
            drop_ids.insert(row.id);
        }
    }
    table.drop_rows(&drop_ids);
    stats.n_double_headers = Some(drop_ids.len());
    debug!(removed = drop_ids.len(), "header duplicates removed");
}
