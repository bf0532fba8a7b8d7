//! The cleaning stages, listed in their pipeline order.
//!
//! Each stage is a pure function of the specification and the current
//! table state with two side effects: mutating the working table and
//! writing its own statistic field. Stages that own a statistic are
//! guarded by its unset sentinel and refuse to run twice.

pub mod casing;
pub mod coerce;
pub mod columns;
pub mod double_header;
pub mod duplicates;
pub mod filter_na;
pub mod outliers;
pub mod replace;

pub use casing::uppercase_columns;
pub use coerce::coerce_types;
pub use columns::remove_columns;
pub use double_header::drop_double_headers;
pub use duplicates::drop_duplicate_rows;
pub use filter_na::drop_nan_rows;
pub use outliers::drop_outliers;
pub use replace::replace_detailed;
