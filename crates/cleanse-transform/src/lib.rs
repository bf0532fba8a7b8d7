pub mod datetime;
pub mod error;
pub mod numeric;
pub mod resolve;
pub mod stages;

pub use datetime::parse_flexible;
pub use error::StageError;
pub use numeric::{parse_f64, parse_i64};
pub use resolve::resolve_columns;
pub use stages::{
    coerce_types, drop_double_headers, drop_duplicate_rows, drop_nan_rows, drop_outliers,
    remove_columns, replace_detailed, uppercase_columns,
};
