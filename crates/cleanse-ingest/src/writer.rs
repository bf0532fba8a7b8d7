//! Delimited-text export of a cleaned dataset.

use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use cleanse_model::Dataset;

use crate::error::IngestError;

/// Write the dataset to a delimited text file, header row first.
/// `Missing` cells export as empty fields.
///
/// # Errors
///
/// `IngestError::Write` when the target cannot be created or written.
pub fn save(table: &Dataset, path: &Path, delimiter: u8) -> Result<(), IngestError> {
    let write_error = |source: csv::Error| IngestError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .map_err(write_error)?;
    writer.write_record(&table.columns).map_err(write_error)?;
    for row in &table.rows {
        writer
            .write_record(row.cells.iter().map(|cell| cell.render()))
            .map_err(write_error)?;
    }
    writer
        .flush()
        .map_err(|source| write_error(csv::Error::from(source)))?;
    debug!(
        path = %path.display(),
        rows = table.n_rows(),
        columns = table.n_cols(),
        "exported cleaned dataset"
    );
    Ok(())
}
