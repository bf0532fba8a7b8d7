//! Column type coercion.
//!
//! Failure isolation differs by target, mirroring the configuration
//! contract: datetime and numeric columns degrade per column with a log
//! entry, while `int_col`/`float_col` are hard requirements whose failure
//! aborts the stage.

use tracing::{debug, error, warn};

use cleanse_model::{Cell, CleaningSpec, Dataset};

use crate::datetime::parse_flexible;
use crate::error::StageError;
use crate::numeric::parse_i64;
use crate::resolve::resolve_columns;

/// Coerce the configured columns, in the order datetime → int → float →
/// numeric.
///
/// # Errors
///
/// `StageError::MissingColumn` when an `int_col`/`float_col` name does not
/// exist; `StageError::Coercion` when one of their cells has no numeric
/// reading.
pub fn coerce_types(table: &mut Dataset, spec: &CleaningSpec) -> Result<(), StageError> {
    coerce_datetime(table, spec);
    coerce_int(table, spec)?;
    coerce_float(table, spec)?;
    coerce_numeric(table, spec);
    debug!("finished datatype corrections");
    Ok(())
}

fn coerce_datetime(table: &mut Dataset, spec: &CleaningSpec) {
    for name in resolve_columns(&spec.datetime_col, &table.columns) {
        let Some(idx) = table.column_index(&name) else {
            continue;
        };
        let mut converted = Vec::with_capacity(table.n_rows());
        let mut parseable = true;
        for cell in table.column_cells(idx) {
            match cell {
                Cell::Missing => converted.push(Cell::Missing),
                Cell::DateTime(value) => converted.push(Cell::DateTime(*value)),
                Cell::Text(text) => match parse_flexible(text) {
                    Some(value) => converted.push(Cell::DateTime(value)),
                    None => {
                        parseable = false;
                        break;
                    }
                },
                Cell::Int(_) | Cell::Float(_) => {
                    parseable = false;
                    break;
                }
            }
        }
        if parseable {
            table.set_column_cells(idx, converted);
            debug!(column = %name, "converted column to datetime");
        } else {
            // One bad column must not abort coercion of the others.
            error!(column = %name, "column is not in a recognized date format");
        }
    }
}

fn coerce_int(table: &mut Dataset, spec: &CleaningSpec) -> Result<(), StageError> {
    for name in &spec.int_col {
        let idx = table
            .column_index(name)
            .ok_or_else(|| StageError::MissingColumn(name.clone()))?;
        let mut converted = Vec::with_capacity(table.n_rows());
        for cell in table.column_cells(idx) {
            let value = cell.as_f64().ok_or_else(|| StageError::Coercion {
                column: name.clone(),
                target: "int",
                reason: format!("value {:?} is not numeric", cell.render()),
            })?;
            converted.push(Cell::Int(value.trunc() as i64));
        }
        table.set_column_cells(idx, converted);
        debug!(column = %name, "converted column to int");
    }
    Ok(())
}

fn coerce_float(table: &mut Dataset, spec: &CleaningSpec) -> Result<(), StageError> {
    for name in &spec.float_col {
        let idx = table
            .column_index(name)
            .ok_or_else(|| StageError::MissingColumn(name.clone()))?;
        let mut converted = Vec::with_capacity(table.n_rows());
        for cell in table.column_cells(idx) {
            match cell {
                Cell::Missing => converted.push(Cell::Missing),
                other => {
                    let value = other.as_f64().ok_or_else(|| StageError::Coercion {
                        column: name.clone(),
                        target: "float",
                        reason: format!("value {:?} is not numeric", other.render()),
                    })?;
                    converted.push(Cell::Float(value));
                }
            }
        }
        table.set_column_cells(idx, converted);
        debug!(column = %name, "converted column to float");
    }
    Ok(())
}

fn coerce_numeric(table: &mut Dataset, spec: &CleaningSpec) {
    for name in resolve_columns(&spec.numeric_col, &table.columns) {
        let Some(idx) = table.column_index(&name) else {
            continue;
        };

        // Int only when nothing is missing and every value reads as i64;
        // a missing cell forces the float reading, like a NaN would.
        let has_missing = table.column_cells(idx).any(Cell::is_missing);
        let int_values: Option<Vec<i64>> = if has_missing {
            None
        } else {
            table
                .column_cells(idx)
                .map(|cell| match cell {
                    Cell::Int(value) => Some(*value),
                    Cell::Text(text) => parse_i64(text),
                    _ => None,
                })
                .collect()
        };
        if let Some(values) = int_values {
            table.set_column_cells(idx, values.into_iter().map(Cell::Int).collect());
            debug!(column = %name, "converted column to numeric (int)");
            continue;
        }

        let float_cells: Option<Vec<Cell>> = table
            .column_cells(idx)
            .map(|cell| match cell {
                Cell::Missing => Some(Cell::Missing),
                other => other.as_f64().map(Cell::Float),
            })
            .collect();
        match float_cells {
            Some(cells) => {
                table.set_column_cells(idx, cells);
                debug!(column = %name, "converted column to numeric (float)");
            }
            None => warn!(column = %name, "could not convert column to numeric"),
        }
    }
}
