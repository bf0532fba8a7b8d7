//! Uppercase normalization of string columns.

use tracing::{debug, warn};

use cleanse_model::{Cell, CleaningSpec, ColumnKind, Dataset};

use crate::resolve::resolve_columns;

/// Uppercase every text cell of the resolved columns. Columns whose
/// values are not textual are skipped with a warning.
pub fn uppercase_columns(table: &mut Dataset, spec: &CleaningSpec) {
    let columns = resolve_columns(&spec.str_columns_upper, &table.columns);
    if columns.is_empty() {
        debug!("nothing to convert to uppercase");
        return;
    }

    for name in &columns {
        let Some(idx) = table.column_index(name) else {
            continue;
        };
        if table.column_kind(idx) == ColumnKind::Text {
            for row in &mut table.rows {
                if let Cell::Text(text) = &mut row.cells[idx] {
                    *text = text.to_uppercase();
                }
            }
        } else {
            warn!(column = %name, "column is not textual; skipping uppercase");
        }
    }
    debug!("finished uppercase conversion");
}
