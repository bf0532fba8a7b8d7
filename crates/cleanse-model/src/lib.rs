pub mod error;
pub mod spec;
pub mod stats;
pub mod table;

pub use error::{Result, SpecError};
pub use spec::{CleaningSpec, ColumnSelection, NaGroups, ReplaceDetail, ReplacementSet};
pub use stats::CleaningStats;
pub use table::{Cell, ColumnKind, Dataset, Row, RowId};
