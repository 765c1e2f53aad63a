use crate::model::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OpsError>;

#[derive(Debug, Error)]
pub enum OpsError {
    #[error("invalid target size: {0}")]
    InvalidSize(String),

    #[error("core volume error: {0}")]
    Core(#[from] CoreError),
}
