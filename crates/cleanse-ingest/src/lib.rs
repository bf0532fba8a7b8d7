pub mod error;
pub mod reader;
pub mod writer;

pub use error::{IngestError, Result};
pub use reader::load;
pub use writer::save;
