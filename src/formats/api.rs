use std::path::Path;

use image::GrayImage;

use crate::model::Volume;

use super::metaimage::{read_metaimage, write_metaimage};
use super::nifti_io::{read_nifti, write_nifti};
use super::raster::write_png;
use super::util::{VOLUME_FORMATS, format_of};
use super::{IoError, Result};

pub fn read_volume(path: impl AsRef<Path>) -> Result<Volume> {
    let path = path.as_ref();
    let format = format_of(path)?;
    match format.as_str() {
        "nii" | "nii.gz" => read_nifti(path),
        "mha" | "mhd" => read_metaimage(path),
        other => Err(IoError::UnsupportedFormat(other.to_string())),
    }
}

pub fn write_volume(path: impl AsRef<Path>, volume: &Volume) -> Result<()> {
    let path = path.as_ref();
    volume.validate()?;
    let format = format_of(path)?;
    match format.as_str() {
        "nii" | "nii.gz" => write_nifti(path, volume),
        "mha" | "mhd" => write_metaimage(path, volume),
        other => Err(IoError::UnsupportedFormat(other.to_string())),
    }
}

pub fn write_slice(path: impl AsRef<Path>, image: &GrayImage) -> Result<()> {
    let path = path.as_ref();
    match format_of(path)?.as_str() {
        "png" => write_png(path, image),
        other => Err(IoError::UnsupportedFormat(other.to_string())),
    }
}

pub fn supported_formats() -> &'static [&'static str] {
    VOLUME_FORMATS
}
