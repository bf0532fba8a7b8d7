//! Unconditional column drops.

use tracing::{debug, info, warn};

use cleanse_model::{CleaningSpec, Dataset};

/// Drop the first column when `drop_row_title` is set, then every column
/// named in `drop_col`. Missing columns warn and never abort, so the
/// stage is safe to re-run.
pub fn remove_columns(table: &mut Dataset, spec: &CleaningSpec) {
    if spec.drop_row_title {
        if table.n_cols() > 0 {
            let name = table.columns[0].clone();
            table.drop_column_at(0);
            info!(column = %name, "dropped first column");
        } else {
            warn!("no first column to drop");
        }
    }

    for name in &spec.drop_col {
        if table.drop_column(name) {
            info!(column = %name, "dropped column");
        } else {
            warn!(column = %name, "could not drop column");
        }
    }
    debug!("finished column removal");
}
