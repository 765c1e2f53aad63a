use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::formats::ImageIo;

use super::Result;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VolumeInfo {
    pub path: PathBuf,
    pub dimension: usize,
    pub size: Vec<usize>,
    pub spacing: Vec<f64>,
    pub origin: Vec<f64>,
    pub direction: Vec<f64>,
    pub pixel_type: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
pub struct InfoService<'a> {
    io: &'a dyn ImageIo,
}

impl<'a> InfoService<'a> {
    pub fn new(io: &'a dyn ImageIo) -> Self {
        Self { io }
    }

    pub fn describe(&self, path: &Path) -> Result<VolumeInfo> {
        let volume = self.io.load(path)?;
        let geometry = &volume.geometry;
        let range = volume.min_max();
        Ok(VolumeInfo {
            path: path.to_path_buf(),
            dimension: geometry.dimension,
            size: geometry.size_vec(),
            spacing: geometry.spacing_vec(),
            origin: geometry.origin_vec(),
            direction: geometry.direction_vec(),
            pixel_type: format!("{:?}", volume.pixel_type),
            min: range.map(|(min, _)| min),
            max: range.map(|(_, max)| max),
        })
    }
}
