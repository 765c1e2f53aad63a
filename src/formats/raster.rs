use std::path::Path;

use image::{GrayImage, ImageFormat};
use ndarray::Array2;

use super::{IoError, Result};

/// Converts an 8-bit plane indexed `[row, column]` into a grayscale image.
pub fn gray_image(plane: &Array2<u8>) -> Result<GrayImage> {
    let (height, width) = plane.dim();
    let bytes = plane.iter().copied().collect::<Vec<_>>();
    GrayImage::from_raw(width as u32, height as u32, bytes)
        .ok_or_else(|| IoError::UnsupportedLayout("failed to construct gray image".into()))
}

pub(crate) fn write_png(path: &Path, image: &GrayImage) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
