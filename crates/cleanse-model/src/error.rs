use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("specification file {path} could not be read: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("specification file {path} is not valid json: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported specification shape: {0}")]
    Shape(String),
}

pub type Result<T> = std::result::Result<T, SpecError>;
