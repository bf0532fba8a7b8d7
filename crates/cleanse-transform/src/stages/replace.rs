//! Detailed character replacement in string columns.

use tracing::debug;

use cleanse_model::{Cell, CleaningSpec, Dataset};

use crate::resolve::resolve_columns;

/// Apply each entry's literal substring swaps to its resolved columns,
/// pair by pair in document order, so later pairs see the result of
/// earlier ones. Only text cells are touched.
pub fn replace_detailed(table: &mut Dataset, spec: &CleaningSpec) {
    if spec.replace_char_details.is_empty() {
        debug!("replacement not activated");
        return;
    }

    for detail in &spec.replace_char_details {
        let columns = resolve_columns(&detail.col, &table.columns);
        for (old, new) in &detail.change.0 {
            for name in &columns {
                let Some(idx) = table.column_index(name) else {
                    continue;
                };
                for row in &mut table.rows {
                    if let Cell::Text(text) = &mut row.cells[idx] {
                        *text = text.replace(old.as_str(), new);
                    }
                }
            }
        }
    }
    debug!("finished replacement");
}
