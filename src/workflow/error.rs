use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorkflowError>;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("cannot derive an output name from `{0}`")]
    UnnamedSource(PathBuf),

    #[error("workflow I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("metadata serialization failure: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
