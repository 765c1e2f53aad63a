use serde::{Deserialize, Serialize};

use super::{CoreError, Result};

pub const IDENTITY_DIRECTION: [f64; 9] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

/// Physical placement of a voxel grid. Vectors are ordered `[x, y, z]` and
/// expressed in LPS; `direction` is a row-major 3x3 matrix whose columns are
/// the axis directions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub dimension: usize,
    pub size: [usize; 3],
    pub spacing: [f64; 3],
    pub origin: [f64; 3],
    pub direction: [f64; 9],
}

impl Geometry {
    pub fn new(size: [usize; 3]) -> Self {
        Self {
            dimension: 3,
            size,
            spacing: [1.0; 3],
            origin: [0.0; 3],
            direction: IDENTITY_DIRECTION,
        }
    }

    pub fn planar(width: usize, height: usize) -> Self {
        Self {
            dimension: 2,
            ..Self::new([width, height, 1])
        }
    }

    pub fn with_spacing(mut self, spacing: [f64; 3]) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_origin(mut self, origin: [f64; 3]) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_direction(mut self, direction: [f64; 9]) -> Self {
        self.direction = direction;
        self
    }

    /// Array shape `[z, y, x]` for a grid of this size.
    pub fn array_shape(&self) -> [usize; 3] {
        [self.size[2], self.size[1], self.size[0]]
    }

    pub fn physical_extent(&self) -> [f64; 3] {
        [
            self.spacing[0] * self.size[0] as f64,
            self.spacing[1] * self.size[1] as f64,
            self.spacing[2] * self.size[2] as f64,
        ]
    }

    pub fn validate(&self) -> Result<()> {
        if !(2..=3).contains(&self.dimension) {
            return Err(CoreError::UnsupportedDimension(self.dimension));
        }
        if self.dimension == 2 && self.size[2] != 1 {
            return Err(CoreError::InvalidGeometry(format!(
                "planar geometry must have a single slice, found {}",
                self.size[2]
            )));
        }
        for (axis, size) in self.size.iter().enumerate() {
            if *size == 0 {
                return Err(CoreError::ZeroSizedDimension { axis });
            }
        }
        for (axis, spacing) in self.spacing.iter().enumerate() {
            if !spacing.is_finite() || *spacing <= 0.0 {
                return Err(CoreError::InvalidGeometry(format!(
                    "spacing along axis {axis} must be positive, found {spacing}"
                )));
            }
        }
        Ok(())
    }

    pub fn size_vec(&self) -> Vec<usize> {
        self.size[..self.dimension].to_vec()
    }

    pub fn spacing_vec(&self) -> Vec<f64> {
        self.spacing[..self.dimension].to_vec()
    }

    pub fn origin_vec(&self) -> Vec<f64> {
        self.origin[..self.dimension].to_vec()
    }

    /// Direction matrix restricted to the leading `dimension` rows/columns.
    pub fn direction_vec(&self) -> Vec<f64> {
        let n = self.dimension;
        (0..n)
            .flat_map(|row| (0..n).map(move |col| self.direction[row * 3 + col]))
            .collect()
    }
}

/// Sidecar written next to a resized image, recording the source grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeMetadata {
    pub original_size: Vec<usize>,
    pub original_spacing: Vec<f64>,
    pub original_direction: Vec<f64>,
    pub original_origin: Vec<f64>,
}

impl ResizeMetadata {
    pub fn from_geometry(geometry: &Geometry) -> Self {
        Self {
            original_size: geometry.size_vec(),
            original_spacing: geometry.spacing_vec(),
            original_direction: geometry.direction_vec(),
            original_origin: geometry.origin_vec(),
        }
    }
}
