use std::ops::Range;

use ndarray::{Array2, ArrayView2, Axis};

use crate::model::{View, Volume};

use super::util::min_max;

#[derive(Debug, Clone)]
pub struct ExtractedSlice<'a> {
    pub view: View,
    pub index: usize,
    pub plane: ArrayView2<'a, f64>,
}

impl ExtractedSlice<'_> {
    pub fn name(&self) -> String {
        format!("{}_{}", self.view, self.index)
    }
}

/// Midpoint of each array axis, `[axis0, axis1, axis2]`.
pub fn default_center(shape: [usize; 3]) -> [i64; 3] {
    shape.map(|extent| (extent / 2) as i64)
}

/// Indices `center - count/2 ..= center + count/2` (floor division on both
/// bounds) clipped to `0..extent`. Centers far outside the axis give an
/// empty window.
pub fn slice_window(center: i64, count: i64, extent: usize) -> Range<usize> {
    let half = count.div_euclid(2);
    let start = (center - half).max(0);
    let end = (center + half + 1).min(extent as i64);
    if start >= end {
        return 0..0;
    }
    start as usize..end as usize
}

/// Planes of `count` consecutive slices around `center` for every view, in
/// axial, coronal, sagittal order.
pub fn extract_slices(
    volume: &Volume,
    center: Option<[i64; 3]>,
    count: i64,
) -> Vec<ExtractedSlice<'_>> {
    let shape = volume.shape();
    let center = center.unwrap_or_else(|| default_center(shape));

    let mut slices = Vec::new();
    for view in View::ALL {
        let axis = view.array_axis();
        for index in slice_window(center[axis], count, shape[axis]) {
            slices.push(ExtractedSlice {
                view,
                index,
                plane: volume.data.index_axis(Axis(axis), index),
            });
        }
    }
    slices
}

/// Min-max normalization onto `0..=255`, rounding half to even. A constant
/// plane maps to all zeros.
pub fn normalize_min_max(plane: &ArrayView2<'_, f64>) -> Array2<u8> {
    let (min, max) = min_max(plane.iter()).unwrap_or((0.0, 0.0));
    let scale = if max - min > f64::EPSILON {
        255.0 / (max - min)
    } else {
        0.0
    };
    plane.mapv(|value| ((value - min) * scale).round_ties_even().clamp(0.0, 255.0) as u8)
}
