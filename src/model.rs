mod axis;
mod error;
mod metadata;
mod volume;

#[cfg(test)]
mod tests;

pub use axis::{PixelType, View};
pub use error::{CoreError, Result};
pub use metadata::{Geometry, IDENTITY_DIRECTION, ResizeMetadata};
pub use volume::Volume;
