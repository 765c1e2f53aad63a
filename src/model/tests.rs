use ndarray::Array3;

use super::{Geometry, PixelType, ResizeMetadata, View, Volume};

#[test]
fn metadata_sidecar_serializes_expected_keys() {
    let geometry = Geometry::new([64, 64, 32])
        .with_spacing([1.0, 1.0, 2.0])
        .with_origin([-10.0, 5.0, 0.5]);
    let metadata = ResizeMetadata::from_geometry(&geometry);
    let value = serde_json::to_value(&metadata).expect("serialize metadata");
    assert_eq!(value["original_size"], serde_json::json!([64, 64, 32]));
    assert_eq!(value["original_spacing"], serde_json::json!([1.0, 1.0, 2.0]));
    assert_eq!(value["original_origin"], serde_json::json!([-10.0, 5.0, 0.5]));
    assert_eq!(
        value["original_direction"],
        serde_json::json!([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0])
    );
}

#[test]
fn planar_metadata_is_truncated_to_two_dimensions() {
    let geometry = Geometry::planar(8, 4).with_spacing([0.5, 0.25, 1.0]);
    let metadata = ResizeMetadata::from_geometry(&geometry);
    assert_eq!(metadata.original_size, vec![8, 4]);
    assert_eq!(metadata.original_spacing, vec![0.5, 0.25]);
    assert_eq!(metadata.original_direction, vec![1.0, 0.0, 0.0, 1.0]);
    assert_eq!(metadata.original_origin, vec![0.0, 0.0]);
}

#[test]
fn volume_rejects_mismatched_geometry() {
    let data = Array3::<f64>::zeros((2, 3, 4));
    let geometry = Geometry::new([2, 3, 4]);
    assert!(Volume::new(data, geometry, PixelType::F32).is_err());
}

#[test]
fn volume_reports_shape_and_range() {
    let data = Array3::from_shape_fn((2, 3, 4), |(z, y, x)| (z * 12 + y * 4 + x) as f64);
    let volume = Volume::new(data, Geometry::new([4, 3, 2]), PixelType::U8).expect("volume");
    assert_eq!(volume.shape(), [2, 3, 4]);
    assert_eq!(volume.size(), [4, 3, 2]);
    assert_eq!(volume.min_max(), Some((0.0, 23.0)));
}

#[test]
fn geometry_rejects_non_positive_spacing() {
    let geometry = Geometry::new([2, 2, 2]).with_spacing([1.0, 0.0, 1.0]);
    assert!(geometry.validate().is_err());
}

#[test]
fn views_map_to_distinct_array_axes() {
    let axes = View::ALL.map(View::array_axis);
    assert_eq!(axes, [0, 1, 2]);
    assert_eq!(View::Coronal.to_string(), "coronal");
}

#[test]
fn integer_cast_truncates_and_saturates() {
    assert_eq!(PixelType::U8.cast(12.9), 12.0);
    assert_eq!(PixelType::U8.cast(300.0), 255.0);
    assert_eq!(PixelType::I16.cast(-3.7), -3.0);
    assert_eq!(PixelType::F32.cast(1.25), 1.25);
}

#[test]
fn wide_types_keep_full_precision() {
    assert_eq!(PixelType::I32.cast(16_777_217.4), 16_777_217.0);
    assert_eq!(PixelType::U32.cast(4_294_967_295.0), 4_294_967_295.0);
    assert_eq!(PixelType::F64.cast(0.1), 0.1);
    assert_eq!(PixelType::F32.cast(0.1), f64::from(0.1_f32));
}
