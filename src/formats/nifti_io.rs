use std::path::Path;

use ndarray::{ArrayD, Axis, Ix3};
use nifti::header::MAGIC_CODE_NIP1;
use nifti::writer::WriterOptions;
use nifti::{IntoNdArray, NiftiHeader, NiftiObject, NiftiType, ReaderOptions};

use crate::model::{Geometry, IDENTITY_DIRECTION, PixelType, Volume};

use super::{IoError, Result};

const XYZT_UNITS_MM: u8 = 2;
const NIFTI_XFORM_SCANNER_ANAT: i16 = 1;

pub(crate) fn read_nifti(path: &Path) -> Result<Volume> {
    let object = ReaderOptions::new().read_file(path)?;
    let header = object.header().clone();
    let pixel_type = if is_scaled(&header) {
        PixelType::F32
    } else {
        pixel_type_for(header.data_type()?)?
    };
    let mut array = object.into_volume().into_ndarray::<f64>()?;

    while array.ndim() > 3 && array.shape().last() == Some(&1) {
        let last = array.ndim() - 1;
        array = array.index_axis_move(Axis(last), 0);
    }
    let shape = array.shape().to_vec();
    let dimension = shape.len();
    if !(2..=3).contains(&dimension) {
        return Err(IoError::UnsupportedLayout(format!(
            "expected a 2D or 3D NIfTI volume, found shape {shape:?}"
        )));
    }

    if dimension == 2 {
        array = array.insert_axis(Axis(2));
    }
    // NIfTI arrays are indexed [x, y, z]; volumes are stored [z, y, x].
    let data = array
        .into_dimensionality::<Ix3>()?
        .permuted_axes([2, 1, 0])
        .as_standard_layout()
        .into_owned();

    let (width, height, depth) = (shape[0], shape[1], shape.get(2).copied().unwrap_or(1));
    let spacing = [
        positive_or_unit(header.pixdim[1]),
        positive_or_unit(header.pixdim[2]),
        if dimension == 3 {
            positive_or_unit(header.pixdim[3])
        } else {
            1.0
        },
    ];
    let (direction, origin) = lps_orientation(&header);
    let mut geometry = Geometry::new([width, height, depth])
        .with_spacing(spacing)
        .with_origin(origin)
        .with_direction(direction);
    if dimension == 2 {
        geometry = planar(geometry);
    }
    Ok(Volume::new(data, geometry, pixel_type)?)
}

pub(crate) fn write_nifti(path: &Path, volume: &Volume) -> Result<()> {
    let geometry = &volume.geometry;
    let header = header_for(geometry);

    let xyz = volume.data.view().permuted_axes([2, 1, 0]);
    let xyz: ArrayD<f64> = if geometry.dimension == 2 {
        xyz.index_axis(Axis(2), 0).as_standard_layout().into_owned().into_dyn()
    } else {
        xyz.as_standard_layout().into_owned().into_dyn()
    };

    let options = WriterOptions::new(path).reference_header(&header);
    match volume.pixel_type {
        PixelType::I8 => options.write_nifti(&xyz.mapv(|value| value as i8))?,
        PixelType::U8 => options.write_nifti(&xyz.mapv(|value| value as u8))?,
        PixelType::I16 => options.write_nifti(&xyz.mapv(|value| value as i16))?,
        PixelType::U16 => options.write_nifti(&xyz.mapv(|value| value as u16))?,
        PixelType::I32 => options.write_nifti(&xyz.mapv(|value| value as i32))?,
        PixelType::U32 => options.write_nifti(&xyz.mapv(|value| value as u32))?,
        PixelType::F32 => options.write_nifti(&xyz.mapv(|value| value as f32))?,
        PixelType::F64 => options.write_nifti(&xyz)?,
    }
    Ok(())
}

fn pixel_type_for(datatype: NiftiType) -> Result<PixelType> {
    let pixel_type = match datatype {
        NiftiType::Int8 => PixelType::I8,
        NiftiType::Uint8 => PixelType::U8,
        NiftiType::Int16 => PixelType::I16,
        NiftiType::Uint16 => PixelType::U16,
        NiftiType::Int32 => PixelType::I32,
        NiftiType::Uint32 => PixelType::U32,
        NiftiType::Float32 => PixelType::F32,
        NiftiType::Float64 => PixelType::F64,
        other => {
            return Err(IoError::UnsupportedLayout(format!(
                "NIfTI datatype {other:?} is not a scalar voxel type"
            )));
        }
    };
    Ok(pixel_type)
}

/// Whether `scl_slope`/`scl_inter` change the stored values. A zero slope
/// disables scaling altogether.
fn is_scaled(header: &NiftiHeader) -> bool {
    let (slope, inter) = (header.scl_slope, header.scl_inter);
    slope != 0.0 && (slope != 1.0 || inter != 0.0)
}

fn positive_or_unit(value: f32) -> f64 {
    let value = f64::from(value).abs();
    if value > 0.0 && value.is_finite() {
        value
    } else {
        1.0
    }
}

fn planar(geometry: Geometry) -> Geometry {
    let mut direction = geometry.direction;
    direction[2] = 0.0;
    direction[5] = 0.0;
    direction[6] = 0.0;
    direction[7] = 0.0;
    direction[8] = 1.0;
    let origin = [geometry.origin[0], geometry.origin[1], 0.0];
    Geometry::planar(geometry.size[0], geometry.size[1])
        .with_spacing([geometry.spacing[0], geometry.spacing[1], 1.0])
        .with_origin(origin)
        .with_direction(direction)
}

/// Direction (row-major, unit columns) and origin in LPS, taken from the
/// sform when present, then the qform quaternion, then identity.
fn lps_orientation(header: &NiftiHeader) -> ([f64; 9], [f64; 3]) {
    let (matrix, origin) = if header.sform_code > 0 {
        let rows = [header.srow_x, header.srow_y, header.srow_z];
        let mut matrix = [0.0; 9];
        let mut origin = [0.0; 3];
        for (row, values) in rows.iter().enumerate() {
            for col in 0..3 {
                matrix[row * 3 + col] = f64::from(values[col]);
            }
            origin[row] = f64::from(values[3]);
        }
        (matrix, origin)
    } else if header.qform_code > 0 {
        let b = f64::from(header.quatern_b);
        let c = f64::from(header.quatern_c);
        let d = f64::from(header.quatern_d);
        let a = (1.0 - (b * b + c * c + d * d)).max(0.0).sqrt();
        let qfac = if header.pixdim[0] < 0.0 { -1.0 } else { 1.0 };
        let matrix = [
            a * a + b * b - c * c - d * d,
            2.0 * (b * c - a * d),
            2.0 * (b * d + a * c) * qfac,
            2.0 * (b * c + a * d),
            a * a + c * c - b * b - d * d,
            2.0 * (c * d - a * b) * qfac,
            2.0 * (b * d - a * c),
            2.0 * (c * d + a * b),
            (a * a + d * d - c * c - b * b) * qfac,
        ];
        let origin = [
            f64::from(header.quatern_x),
            f64::from(header.quatern_y),
            f64::from(header.quatern_z),
        ];
        (matrix, origin)
    } else {
        (IDENTITY_DIRECTION, [0.0; 3])
    };

    let mut direction = IDENTITY_DIRECTION;
    for col in 0..3 {
        let norm = (0..3)
            .map(|row| matrix[row * 3 + col] * matrix[row * 3 + col])
            .sum::<f64>()
            .sqrt();
        if norm > 1e-9 {
            for row in 0..3 {
                direction[row * 3 + col] = matrix[row * 3 + col] / norm;
            }
        }
    }
    // RAS -> LPS
    for col in 0..3 {
        direction[col] = -direction[col];
        direction[3 + col] = -direction[3 + col];
    }
    (direction, [-origin[0], -origin[1], origin[2]])
}

fn header_for(geometry: &Geometry) -> NiftiHeader {
    let mut srow = [[0.0_f32; 4]; 3];
    for row in 0..3 {
        // LPS -> RAS flips the first two rows.
        let sign = if row < 2 { -1.0 } else { 1.0 };
        for col in 0..3 {
            srow[row][col] =
                (sign * geometry.direction[row * 3 + col] * geometry.spacing[col]) as f32;
        }
        srow[row][3] = (sign * geometry.origin[row]) as f32;
    }

    NiftiHeader {
        pixdim: [
            1.0,
            geometry.spacing[0] as f32,
            geometry.spacing[1] as f32,
            geometry.spacing[2] as f32,
            1.0,
            1.0,
            1.0,
            1.0,
        ],
        vox_offset: 352.0,
        scl_slope: 1.0,
        scl_inter: 0.0,
        xyzt_units: XYZT_UNITS_MM,
        qform_code: 0,
        sform_code: NIFTI_XFORM_SCANNER_ANAT,
        srow_x: srow[0],
        srow_y: srow[1],
        srow_z: srow[2],
        magic: *MAGIC_CODE_NIP1,
        ..NiftiHeader::default()
    }
}
