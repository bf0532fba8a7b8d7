//! Delimited-text loading into the dataset substrate.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use cleanse_model::{Cell, Dataset};

use crate::error::IngestError;

/// Strip a UTF-8 BOM and surrounding whitespace from a header cell.
fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// An empty value (after trimming) loads as `Missing`; everything else
/// loads as text. Typing happens later, in the coercion stage.
fn cell_from(raw: &str) -> Cell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Cell::Missing
    } else {
        Cell::Text(trimmed.to_string())
    }
}

/// Load a delimited text file into a [`Dataset`].
///
/// The first non-blank record is the header row. Blank records are
/// skipped; short records are padded with `Missing` so every row stays
/// parallel to the header.
///
/// # Errors
///
/// `IngestError::Read` when the file is missing, unreadable, or not valid
/// UTF-8; `IngestError::Malformed` when it holds no header row.
pub fn load(path: &Path, delimiter: u8) -> Result<Dataset, IngestError> {
    let read_error = |source: csv::Error| IngestError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(read_error)?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(read_error)?;
        let row: Vec<String> = record.iter().map(|value| value.trim().to_string()).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Err(IngestError::Malformed {
            path: path.to_path_buf(),
            reason: "no header row".to_string(),
        });
    }

    let columns: Vec<String> = raw_rows[0].iter().map(|value| normalize_header(value)).collect();
    let mut table = Dataset::new(columns);
    for record in raw_rows.iter().skip(1) {
        let mut cells = Vec::with_capacity(table.n_cols());
        for idx in 0..table.n_cols() {
            cells.push(cell_from(record.get(idx).map(String::as_str).unwrap_or("")));
        }
        table.push_row(cells);
    }

    debug!(
        path = %path.display(),
        rows = table.n_rows(),
        columns = table.n_cols(),
        "loaded delimited file"
    );
    Ok(table)
}
