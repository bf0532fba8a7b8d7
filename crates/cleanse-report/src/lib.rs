pub mod cleaning_info;
pub mod profile;

pub use cleaning_info::{emit_cleaning_info, render_cleaning_info};
pub use profile::{ColumnProfile, Profile};
