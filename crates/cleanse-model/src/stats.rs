//! Statistics collected by the cleaning stages.

use std::collections::BTreeMap;

/// One field per row-dropping stage, written exactly once.
///
/// `None` is the unset sentinel: the stage has not run yet. Once a field is
/// `Some`, re-invoking its stage is a warned no-op, so counts can never be
/// doubled by a second pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleaningStats {
    pub n_double_headers: Option<usize>,
    pub n_nan_rows: Option<usize>,
    pub n_duplicates: Option<usize>,
    pub n_outlier_rows: Option<usize>,
    /// Per-column (lower, upper) IQR bounds from outlier removal.
    pub whiskers: Option<BTreeMap<String, (f64, f64)>>,
}
