use ndarray::{Array2, Array3};

use crate::model::{Geometry, PixelType, View, Volume};

use super::{
    ResizePlan, default_center, extract_slices, normalize_min_max, resample_linear,
    resize_volume, slice_window,
};

fn cube(extent: usize) -> Volume {
    let data = Array3::from_shape_fn((extent, extent, extent), |(z, y, x)| {
        (z * 100 + y * 10 + x) as f64
    });
    Volume::new(data, Geometry::new([extent; 3]), PixelType::F32).expect("volume")
}

fn row(values: &[f64], pixel_type: PixelType) -> Volume {
    let data = Array3::from_shape_vec((1, 1, values.len()), values.to_vec()).expect("shape");
    Volume::new(data, Geometry::new([values.len(), 1, 1]), pixel_type).expect("volume")
}

#[test]
fn spacing_preserves_physical_extent() {
    let geometry = Geometry::new([64, 64, 32]).with_spacing([1.0, 1.0, 2.0]);
    let plan = ResizePlan::new(&geometry, &[32, 32, 16]).expect("plan");
    assert_eq!(plan.size, [32, 32, 16]);
    assert_eq!(plan.spacing, [2.0, 2.0, 4.0]);

    let odd = Geometry::new([100, 37, 11]).with_spacing([0.7, 1.3, 3.1]);
    let plan = ResizePlan::new(&odd, &[33, 64, 5]).expect("plan");
    let before = odd.physical_extent();
    let after = plan.geometry(&odd).physical_extent();
    for axis in 0..3 {
        assert!((before[axis] - after[axis]).abs() < 1e-9);
    }
}

#[test]
fn two_entry_size_keeps_slices_and_uses_unit_spacing() {
    let geometry = Geometry::new([64, 64, 32]).with_spacing([1.0, 1.0, 2.0]);
    let plan = ResizePlan::new(&geometry, &[128, 16]).expect("plan");
    assert_eq!(plan.size, [128, 16, 32]);
    assert_eq!(plan.spacing, [0.5, 4.0, 1.0]);
}

#[test]
fn invalid_target_sizes_are_rejected() {
    let geometry = Geometry::new([8, 8, 8]);
    assert!(ResizePlan::new(&geometry, &[8, 0, 8]).is_err());
    assert!(ResizePlan::new(&geometry, &[8]).is_err());
    assert!(ResizePlan::new(&geometry, &[8, 8, 8, 8]).is_err());
    assert!(ResizePlan::new(&Geometry::planar(8, 8), &[4, 4, 4]).is_err());
}

#[test]
fn resampling_to_same_grid_is_identity() {
    let volume = cube(4);
    let resized = resize_volume(&volume, &[4, 4, 4]).expect("resize");
    assert_eq!(resized.data, volume.data);
    assert_eq!(resized.geometry, volume.geometry);
}

#[test]
fn downsampling_samples_source_grid_positions() {
    let volume = row(&[0.0, 10.0, 20.0, 30.0], PixelType::F32);
    let resized = resize_volume(&volume, &[2, 1, 1]).expect("resize");
    assert_eq!(resized.geometry.spacing, [2.0, 1.0, 1.0]);
    assert_eq!(resized.data.iter().copied().collect::<Vec<_>>(), vec![0.0, 20.0]);
}

#[test]
fn upsampling_interpolates_and_fills_outside_with_zero() {
    let volume = row(&[0.0, 10.0], PixelType::F32);
    let resized = resize_volume(&volume, &[4, 1, 1]).expect("resize");
    assert_eq!(
        resized.data.iter().copied().collect::<Vec<_>>(),
        vec![0.0, 5.0, 10.0, 0.0]
    );
}

#[test]
fn integer_pixel_types_truncate_interpolated_values() {
    let volume = row(&[0.0, 5.0], PixelType::U8);
    let resized = resize_volume(&volume, &[4, 1, 1]).expect("resize");
    assert_eq!(resized.pixel_type, PixelType::U8);
    assert_eq!(resized.data[[0, 0, 1]], 2.0);
}

#[test]
fn resample_keeps_origin_and_direction() {
    let direction = [0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, -1.0];
    let mut volume = cube(4);
    volume.geometry = volume
        .geometry
        .clone()
        .with_origin([3.0, -2.0, 1.5])
        .with_direction(direction);
    let plan = ResizePlan::new(&volume.geometry, &[2, 2, 2]).expect("plan");
    let resized = resample_linear(&volume, &plan).expect("resample");
    assert_eq!(resized.geometry.origin, [3.0, -2.0, 1.5]);
    assert_eq!(resized.geometry.direction, direction);
    assert_eq!(resized.shape(), [2, 2, 2]);
}

#[test]
fn default_center_is_array_midpoint() {
    assert_eq!(default_center([10, 10, 10]), [5, 5, 5]);
    assert_eq!(default_center([1, 7, 4]), [0, 3, 2]);
}

#[test]
fn midpoint_extraction_yields_one_slice_per_view() {
    let volume = cube(10);
    let slices = extract_slices(&volume, None, 1);
    let names = slices.iter().map(|slice| slice.name()).collect::<Vec<_>>();
    assert_eq!(names, vec!["axial_5", "coronal_5", "sagittal_5"]);
    assert_eq!(slices[0].plane[[2, 3]], 523.0);
    assert_eq!(slices[1].plane[[2, 3]], 253.0);
    assert_eq!(slices[2].plane[[2, 3]], 235.0);
}

#[test]
fn window_is_clipped_at_volume_boundaries() {
    assert_eq!(slice_window(0, 3, 10), 0..2);
    assert_eq!(slice_window(9, 3, 10), 8..10);
    assert_eq!(slice_window(5, 3, 10), 4..7);
    assert_eq!(slice_window(0, 1, 1), 0..1);
    assert_eq!(slice_window(10, 3, 10), 9..10);
    assert!(slice_window(12, 3, 10).is_empty());
    assert!(slice_window(-3, 3, 10).is_empty());
}

#[test]
fn even_counts_keep_floor_division_bounds() {
    assert_eq!(slice_window(5, 2, 10), 4..7);
    assert_eq!(slice_window(5, 4, 10), 3..8);
    assert!(slice_window(5, -1, 10).is_empty());
}

#[test]
fn clipped_location_limits_slice_count() {
    let volume = cube(10);
    let slices = extract_slices(&volume, Some([0, 5, 9]), 3);
    let count = |view: View| slices.iter().filter(|slice| slice.view == view).count();
    assert_eq!(count(View::Axial), 2);
    assert_eq!(count(View::Coronal), 3);
    assert_eq!(count(View::Sagittal), 2);
    assert!(slices.iter().all(|slice| slice.plane.dim() == (10, 10)));
}

#[test]
fn normalization_spans_full_byte_range() {
    let plane = Array2::from_shape_vec((2, 3), vec![-50.0_f64, 0.0, 25.0, 50.0, 100.0, 10.0])
        .expect("shape");
    let normalized = normalize_min_max(&plane.view());
    assert_eq!(normalized[[0, 0]], 0);
    assert_eq!(normalized[[1, 1]], 255);
    assert_eq!(normalized[[0, 1]], 85);
    assert_eq!(normalized.dim(), (2, 3));
}

#[test]
fn normalization_keeps_the_layout_of_strided_views() {
    let plane = Array2::from_shape_vec((2, 3), vec![0.0_f64, 1.0, 2.0, 3.0, 4.0, 6.0])
        .expect("shape");
    let normalized = normalize_min_max(&plane.t());
    assert_eq!(normalized.dim(), (3, 2));
    assert_eq!(normalized[[0, 1]], 128);
    assert_eq!(normalized[[2, 0]], 85);
    assert_eq!(normalized[[2, 1]], 255);
}

#[test]
fn normalization_rounds_half_to_even() {
    let plane = Array2::from_shape_vec((1, 3), vec![0.0_f64, 0.5, 1.0]).expect("shape");
    let normalized = normalize_min_max(&plane.view());
    assert_eq!(normalized.iter().copied().collect::<Vec<_>>(), vec![0, 128, 255]);
}

#[test]
fn constant_planes_normalize_to_zero() {
    let plane = Array2::from_elem((3, 3), 42.0_f64);
    let normalized = normalize_min_max(&plane.view());
    assert!(normalized.iter().all(|value| *value == 0));
}
