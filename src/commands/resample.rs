use ndarray::Array3;

use crate::model::{Geometry, Volume};

use super::util::clamp_index;
use super::{OpsError, Result};

/// Voxel grid a volume is resampled onto: the requested voxel counts and the
/// spacing that keeps the physical field of view of the source.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizePlan {
    pub size: [usize; 3],
    pub spacing: [f64; 3],
}

impl ResizePlan {
    /// `new_size` is `[x, y]` or `[x, y, z]`. Without a third entry the
    /// slice count is kept and the third spacing becomes `1.0`.
    pub fn new(geometry: &Geometry, new_size: &[usize]) -> Result<Self> {
        if !(2..=3).contains(&new_size.len()) {
            return Err(OpsError::InvalidSize(format!(
                "expected 2 or 3 entries, found {}",
                new_size.len()
            )));
        }
        if new_size.len() > geometry.dimension {
            return Err(OpsError::InvalidSize(format!(
                "{} entries requested for a {}D image",
                new_size.len(),
                geometry.dimension
            )));
        }
        if let Some(axis) = new_size.iter().position(|size| *size == 0) {
            return Err(OpsError::InvalidSize(format!(
                "axis {axis} has zero voxels"
            )));
        }

        let mut size = geometry.size;
        let mut spacing = [1.0; 3];
        for (axis, target) in new_size.iter().enumerate() {
            size[axis] = *target;
            spacing[axis] =
                geometry.spacing[axis] * (geometry.size[axis] as f64 / *target as f64);
        }
        Ok(Self { size, spacing })
    }

    pub fn geometry(&self, source: &Geometry) -> Geometry {
        Geometry {
            dimension: source.dimension,
            size: self.size,
            spacing: self.spacing,
            origin: source.origin,
            direction: source.direction,
        }
    }
}

/// Resamples onto `plan` with linear interpolation, keeping origin,
/// direction and pixel type. Points outside the source buffer get `0.0`.
pub fn resample_linear(volume: &Volume, plan: &ResizePlan) -> Result<Volume> {
    let source = &volume.geometry;
    let scale = [
        plan.spacing[0] / source.spacing[0],
        plan.spacing[1] / source.spacing[1],
        plan.spacing[2] / source.spacing[2],
    ];
    let geometry = plan.geometry(source);
    let data = Array3::from_shape_fn(geometry.array_shape(), |(z, y, x)| {
        let index = [
            z as f64 * scale[2],
            y as f64 * scale[1],
            x as f64 * scale[0],
        ];
        let value = interpolate(&volume.data, index).unwrap_or(0.0);
        volume.pixel_type.cast(value)
    });
    Ok(Volume::new(data, geometry, volume.pixel_type)?)
}

pub fn resize_volume(volume: &Volume, new_size: &[usize]) -> Result<Volume> {
    let plan = ResizePlan::new(&volume.geometry, new_size)?;
    resample_linear(volume, &plan)
}

/// Trilinear interpolation at a continuous `[z, y, x]` index. Returns `None`
/// when the index lies outside `[-0.5, n - 0.5)` on any axis; inside that
/// band the neighbours are clamped to the buffer.
pub(crate) fn interpolate(data: &Array3<f64>, index: [f64; 3]) -> Option<f64> {
    let (depth, height, width) = data.dim();
    let extents = [depth, height, width];

    let mut lower = [0usize; 3];
    let mut upper = [0usize; 3];
    let mut fraction = [0.0; 3];
    for axis in 0..3 {
        let position = index[axis];
        let extent = extents[axis];
        if position < -0.5 || position >= extent as f64 - 0.5 {
            return None;
        }
        let base = position.floor();
        fraction[axis] = position - base;
        lower[axis] = clamp_index(base as i64, extent);
        upper[axis] = clamp_index(base as i64 + 1, extent);
    }

    let mut value = 0.0;
    for corner in 0..8 {
        let mut weight = 1.0;
        let mut at = [0usize; 3];
        for axis in 0..3 {
            if corner & (1 << axis) == 0 {
                weight *= 1.0 - fraction[axis];
                at[axis] = lower[axis];
            } else {
                weight *= fraction[axis];
                at[axis] = upper[axis];
            }
        }
        if weight != 0.0 {
            value += weight * data[at];
        }
    }
    Some(value)
}
