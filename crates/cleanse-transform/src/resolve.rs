//! Translates user-declared column sets into concrete column lists.
//!
//! This is the single point where mismatches between the specification and
//! the live schema are absorbed: unknown names are dropped with a warning,
//! never an error.

use cleanse_model::ColumnSelection;
use tracing::warn;

/// Resolve a selection against the live column set.
///
/// `All` yields every live column in order; an explicit list is filtered
/// to the names that exist, warning on each miss.
pub fn resolve_columns(selection: &ColumnSelection, columns: &[String]) -> Vec<String> {
    match selection {
        ColumnSelection::All => columns.to_vec(),
        ColumnSelection::Columns(names) => {
            let mut resolved = Vec::with_capacity(names.len());
            for name in names {
                if columns.iter().any(|column| column == name) {
                    resolved.push(name.clone());
                } else {
                    warn!(column = %name, "requested column is not in the dataset");
                }
            }
            resolved
        }
    }
}
