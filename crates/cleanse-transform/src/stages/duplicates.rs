//! Full-row duplicate removal.

use std::collections::HashSet;

use tracing::{debug, warn};

use cleanse_model::{Cell, CleaningSpec, CleaningStats, Dataset};

/// Remove rows that exactly duplicate an earlier row across all columns,
/// keeping the first occurrence. Missing cells count as equal to each
/// other, so rows differing only in which value is absent still match.
pub fn drop_duplicate_rows(table: &mut Dataset, stats: &mut CleaningStats, spec: &CleaningSpec) {
    if stats.n_duplicates.is_some() {
        warn!("duplicates are already dropped");
        return;
    }
    if !spec.drop_duplicates {
        debug!("duplicate removal not activated");
        return;
    }

    let before = table.n_rows();
    let mut seen: HashSet<Vec<String>> = HashSet::new();
    table.retain_rows(|row| {
        let key: Vec<String> = row.cells.iter().map(Cell::dedup_key).collect();
        seen.insert(key)
    });
    let removed = before - table.n_rows();
    stats.n_duplicates = Some(removed);
    debug!(removed, "duplicate rows removed");
}
