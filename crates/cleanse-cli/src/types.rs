//! Result types surfaced to the terminal summary.

use std::path::PathBuf;

use cleanse_model::{CleaningStats, Dataset};

/// Outcome of one pipeline run.
#[derive(Debug)]
pub struct RunResult {
    pub stats: CleaningStats,
    pub rows_before: usize,
    pub rows_after: usize,
    pub columns_before: usize,
    pub columns_after: usize,
    /// The cleaned in-memory table; usable even when the export failed.
    pub cleaned: Dataset,
    /// The report block when export is disabled; `None` when it went to
    /// the info file instead.
    pub report: Option<String>,
    /// Where the cleaned data was written, when export succeeded.
    pub output_file: Option<PathBuf>,
    /// Where the report was written, when export is enabled.
    pub info_file: Option<PathBuf>,
    /// Export failure downgraded to a warning.
    pub export_error: Option<String>,
}
