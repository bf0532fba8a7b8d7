use thiserror::Error;

#[derive(Debug, Error)]
pub enum StageError {
    #[error("column {column} cannot be coerced to {target}: {reason}")]
    Coercion {
        column: String,
        target: &'static str,
        reason: String,
    },
    #[error("column {0} does not exist")]
    MissingColumn(String),
}
