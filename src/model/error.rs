use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("voxel array shape {data_shape:?} does not match geometry size {geometry_size:?}")]
    ShapeMismatch {
        data_shape: [usize; 3],
        geometry_size: [usize; 3],
    },

    #[error("invalid dimension size 0 at axis {axis}")]
    ZeroSizedDimension { axis: usize },

    #[error("unsupported image dimensionality: {0} (expected 2 or 3)")]
    UnsupportedDimension(usize),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}
