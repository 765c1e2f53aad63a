use crate::model::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IoError>;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("unsupported volume layout for this format: {0}")]
    UnsupportedLayout(String),

    #[error("malformed image header: {0}")]
    MalformedHeader(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encode failure: {0}")]
    Image(#[from] image::ImageError),

    #[error("NIfTI decode/encode failure: {0}")]
    Nifti(#[from] nifti::NiftiError),

    #[error("voxel array shape failure: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("core volume/geometry failure: {0}")]
    Core(#[from] CoreError),
}
