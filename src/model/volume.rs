use ndarray::Array3;

use super::{CoreError, Geometry, PixelType, Result};

/// Voxel data indexed `[z, y, x]` together with its physical geometry.
#[derive(Debug, Clone)]
pub struct Volume {
    pub data: Array3<f64>,
    pub geometry: Geometry,
    pub pixel_type: PixelType,
}

impl Volume {
    pub fn new(data: Array3<f64>, geometry: Geometry, pixel_type: PixelType) -> Result<Self> {
        let volume = Self {
            data,
            geometry,
            pixel_type,
        };
        volume.validate()?;
        Ok(volume)
    }

    pub fn shape(&self) -> [usize; 3] {
        let (depth, height, width) = self.data.dim();
        [depth, height, width]
    }

    pub fn size(&self) -> [usize; 3] {
        self.geometry.size
    }

    pub fn spacing(&self) -> [f64; 3] {
        self.geometry.spacing
    }

    pub fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        if self.shape() != self.geometry.array_shape() {
            return Err(CoreError::ShapeMismatch {
                data_shape: self.shape(),
                geometry_size: self.geometry.size,
            });
        }
        Ok(())
    }

    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut iter = self.data.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), value| {
            (min.min(value), max.max(value))
        }))
    }
}
