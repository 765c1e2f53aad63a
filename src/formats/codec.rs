use std::fmt::Debug;
use std::path::Path;

use image::GrayImage;

use crate::model::Volume;

use super::{Result, read_volume, write_slice, write_volume};

/// Image storage used by the resize and slice services. The default
/// implementation talks to the filesystem; tests substitute their own.
pub trait ImageIo: Debug {
    fn load(&self, path: &Path) -> Result<Volume>;
    fn save(&self, path: &Path, volume: &Volume) -> Result<()>;
    fn save_slice(&self, path: &Path, image: &GrayImage) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultImageIo;

impl ImageIo for DefaultImageIo {
    fn load(&self, path: &Path) -> Result<Volume> {
        read_volume(path)
    }

    fn save(&self, path: &Path, volume: &Volume) -> Result<()> {
        write_volume(path, volume)
    }

    fn save_slice(&self, path: &Path, image: &GrayImage) -> Result<()> {
        write_slice(path, image)
    }
}
