use crate::commands::OpsError;
use crate::formats::IoError;
use crate::model::CoreError;
use crate::workflow::WorkflowError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("volume error: {0}")]
    Core(#[from] CoreError),

    #[error("image I/O error: {0}")]
    Io(#[from] IoError),

    #[error("operation error: {0}")]
    Ops(#[from] OpsError),

    #[error("workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    #[error("request rejected: {0}")]
    Rejected(String),
}
