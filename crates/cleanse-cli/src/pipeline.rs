//! The cleaning pipeline with explicit stages.
//!
//! Stages run in a fixed order:
//! 1. **Double header**: drop rows repeating the header
//! 2. **Column removal**: first column and configured names
//! 3. **NaN rows**: null filtering by the all/any groups
//! 4. **Duplicate rows**: keep first occurrences
//! 5. **Type coercion**: datetime, int, float, numeric targets
//! 6. **Replacement**: literal substring swaps in string columns
//! 7. **Uppercase**: normalize string columns
//! 8. **Outliers**: IQR whisker filtering
//!
//! The order is load-bearing: outlier bounds are computed after coercion
//! so numeric columns are genuinely numeric, and duplicates go after NaN
//! filtering so rows differing only in dropped-NaN presence are not
//! counted twice. Profiling, export, and the report follow the stages.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context as _, Result};
use tracing::{debug, info, info_span, warn};

use cleanse_ingest::{load, save};
use cleanse_model::{CleaningSpec, CleaningStats, Dataset};
use cleanse_report::{Profile, emit_cleaning_info};
use cleanse_transform::{
    coerce_types, drop_double_headers, drop_duplicate_rows, drop_nan_rows, drop_outliers,
    remove_columns, replace_detailed, uppercase_columns,
};

use crate::types::RunResult;

/// Run the whole pipeline for one specification file.
///
/// # Errors
///
/// Fails on a missing or malformed specification, a failed initial load,
/// an int/float coercion failure, or a failed profile/report write. A
/// failed data export is downgraded to a warning and recorded in the
/// result instead.
pub fn run_cleaning(spec_path: &Path) -> Result<RunResult> {
    let run_span = info_span!("clean", spec = %spec_path.display());
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let spec = CleaningSpec::load(spec_path).context("load specification")?;
    let origin = load(&spec.input_file, spec.delimiter_byte()).context("load input data")?;
    let rows_before = origin.n_rows();
    let columns_before = origin.n_cols();
    debug!(rows = rows_before, columns = columns_before, "input loaded");

    let mut working = origin.clone();
    let mut stats = CleaningStats::default();
    run_stages(&mut working, &mut stats, &spec)?;

    if spec.create_profiles {
        info_span!("profile").in_scope(|| -> Result<()> {
            let start = Instant::now();
            Profile::new(&origin, "Origin").write(&spec.input_file_profile)?;
            Profile::new(&working, "Cleaned").write(&spec.output_file_profile)?;
            debug!(
                duration_ms = start.elapsed().as_millis() as u64,
                "profiles written"
            );
            Ok(())
        })?;
    }

    let mut output_file = None;
    let mut export_error = None;
    if spec.export_output_file {
        match save(&working, &spec.output_file, spec.delimiter_byte()) {
            Ok(()) => output_file = Some(spec.output_file.clone()),
            Err(error) => {
                // The in-memory result stays usable; the run goes on.
                warn!(error = %error, "could not save cleaned data");
                export_error = Some(error.to_string());
            }
        }
    }

    let info_file = spec
        .export_output_file
        .then(|| spec.cleaning_info_file.clone());
    let report = emit_cleaning_info(&stats, &working, info_file.as_deref())
        .context("emit cleaning info")?;

    info!(
        rows_before,
        rows_after = working.n_rows(),
        duration_ms = run_start.elapsed().as_millis() as u64,
        "cleaning complete"
    );

    Ok(RunResult {
        stats,
        rows_before,
        rows_after: working.n_rows(),
        columns_before,
        columns_after: working.n_cols(),
        cleaned: working,
        report,
        output_file,
        info_file,
        export_error,
    })
}

fn run_stages(
    working: &mut Dataset,
    stats: &mut CleaningStats,
    spec: &CleaningSpec,
) -> Result<()> {
    let start = Instant::now();
    info_span!("double_header").in_scope(|| drop_double_headers(working, stats, spec));
    debug!(
        rows = working.n_rows(),
        duration_ms = start.elapsed().as_millis() as u64,
        "double header stage complete"
    );

    let start = Instant::now();
    info_span!("remove_columns").in_scope(|| remove_columns(working, spec));
    debug!(
        columns = working.n_cols(),
        duration_ms = start.elapsed().as_millis() as u64,
        "column removal complete"
    );

    let start = Instant::now();
    info_span!("nan_rows").in_scope(|| drop_nan_rows(working, stats, spec));
    debug!(
        rows = working.n_rows(),
        duration_ms = start.elapsed().as_millis() as u64,
        "nan filtering complete"
    );

    let start = Instant::now();
    info_span!("duplicates").in_scope(|| drop_duplicate_rows(working, stats, spec));
    debug!(
        rows = working.n_rows(),
        duration_ms = start.elapsed().as_millis() as u64,
        "duplicate removal complete"
    );

    let start = Instant::now();
    info_span!("coerce").in_scope(|| coerce_types(working, spec)).context("type coercion")?;
    debug!(
        duration_ms = start.elapsed().as_millis() as u64,
        "type coercion complete"
    );

    let start = Instant::now();
    info_span!("replace").in_scope(|| replace_detailed(working, spec));
    debug!(
        duration_ms = start.elapsed().as_millis() as u64,
        "replacement complete"
    );

    let start = Instant::now();
    info_span!("uppercase").in_scope(|| uppercase_columns(working, spec));
    debug!(
        duration_ms = start.elapsed().as_millis() as u64,
        "uppercase conversion complete"
    );

    let start = Instant::now();
    info_span!("outliers").in_scope(|| drop_outliers(working, stats, spec));
    debug!(
        rows = working.n_rows(),
        duration_ms = start.elapsed().as_millis() as u64,
        "outlier removal complete"
    );

    Ok(())
}
