use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};
use flate2::read::ZlibDecoder;
use ndarray::Array3;

use crate::model::{Geometry, PixelType, Volume};

use super::util::{join_numbers, parse_numbers};
use super::{IoError, Result};

const LOCAL_DATA: &str = "LOCAL";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MetaHeader {
    pub(crate) ndims: usize,
    pub(crate) dim_size: Vec<usize>,
    pub(crate) spacing: Vec<f64>,
    pub(crate) offset: Vec<f64>,
    pub(crate) transform: Vec<f64>,
    pub(crate) element_type: PixelType,
    pub(crate) channels: usize,
    pub(crate) msb: bool,
    pub(crate) compressed: bool,
    pub(crate) data_file: String,
}

pub(crate) fn read_metaimage(path: &Path) -> Result<Volume> {
    let bytes = fs::read(path)?;
    let (header, data_start) = parse_header(&bytes)?;

    let raw = if header.data_file.eq_ignore_ascii_case(LOCAL_DATA) {
        bytes[data_start..].to_vec()
    } else {
        fs::read(sibling(path, &header.data_file))?
    };
    let raw = if header.compressed {
        let mut inflated = Vec::new();
        ZlibDecoder::new(raw.as_slice()).read_to_end(&mut inflated)?;
        inflated
    } else {
        raw
    };

    let count = header
        .dim_size
        .iter()
        .try_fold(1usize, |count, extent| count.checked_mul(*extent))
        .ok_or_else(|| {
            IoError::MalformedHeader(format!("DimSize {:?} overflows", header.dim_size))
        })?;
    let samples = if header.msb {
        decode_samples::<BigEndian>(&raw, header.element_type, count)?
    } else {
        decode_samples::<LittleEndian>(&raw, header.element_type, count)?
    };

    let geometry = geometry_for(&header)?;
    let data = Array3::from_shape_vec(geometry.array_shape(), samples)?;
    Ok(Volume::new(data, geometry, header.element_type)?)
}

pub(crate) fn write_metaimage(path: &Path, volume: &Volume) -> Result<()> {
    let local = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("mha"))
        .unwrap_or(true);
    let data_file = if local {
        LOCAL_DATA.to_string()
    } else {
        raw_file_name(path)?
    };

    let header = header_for(volume, data_file);
    let payload = encode_samples(volume)?;

    let mut text = render_header(&header).into_bytes();
    if local {
        text.extend_from_slice(&payload);
        fs::write(path, text)?;
    } else {
        fs::write(path, text)?;
        fs::write(sibling(path, &header.data_file), payload)?;
    }
    Ok(())
}

pub(crate) fn parse_header(bytes: &[u8]) -> Result<(MetaHeader, usize)> {
    let mut header = MetaHeader {
        ndims: 0,
        dim_size: Vec::new(),
        spacing: Vec::new(),
        offset: Vec::new(),
        transform: Vec::new(),
        element_type: PixelType::U8,
        channels: 1,
        msb: false,
        compressed: false,
        data_file: String::new(),
    };
    let mut element_type = None;
    let mut position = 0;

    while position < bytes.len() {
        let line_end = bytes[position..]
            .iter()
            .position(|byte| *byte == b'\n')
            .map(|index| position + index)
            .unwrap_or(bytes.len());
        let line = String::from_utf8_lossy(&bytes[position..line_end]);
        position = (line_end + 1).min(bytes.len());

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        match key {
            "NDims" => {
                header.ndims = value.parse().map_err(|_| {
                    IoError::MalformedHeader(format!("`NDims` is not an integer: `{value}`"))
                })?;
            }
            "DimSize" => header.dim_size = parse_numbers(key, value)?,
            "ElementSpacing" => header.spacing = parse_numbers(key, value)?,
            "ElementSize" if header.spacing.is_empty() => {
                header.spacing = parse_numbers(key, value)?;
            }
            "Offset" | "Origin" | "Position" => header.offset = parse_numbers(key, value)?,
            "TransformMatrix" | "Rotation" | "Orientation" => {
                header.transform = parse_numbers(key, value)?;
            }
            "ElementType" => element_type = Some(element_type_for(value)?),
            "ElementNumberOfChannels" => {
                header.channels = value.parse().map_err(|_| {
                    IoError::MalformedHeader(format!(
                        "`ElementNumberOfChannels` is not an integer: `{value}`"
                    ))
                })?;
            }
            "BinaryDataByteOrderMSB" | "ElementByteOrderMSB" => header.msb = parse_bool(value),
            "CompressedData" => header.compressed = parse_bool(value),
            "ElementDataFile" => {
                header.data_file = value.to_string();
                break;
            }
            _ => {}
        }
    }

    if header.data_file.is_empty() {
        return Err(IoError::MalformedHeader(
            "missing `ElementDataFile` entry".to_string(),
        ));
    }
    header.element_type = element_type
        .ok_or_else(|| IoError::MalformedHeader("missing `ElementType` entry".to_string()))?;
    if header.channels != 1 {
        return Err(IoError::UnsupportedLayout(format!(
            "only scalar images are supported, found {} channels",
            header.channels
        )));
    }
    if header.dim_size.len() != header.ndims {
        return Err(IoError::MalformedHeader(format!(
            "`DimSize` has {} entries but `NDims` is {}",
            header.dim_size.len(),
            header.ndims
        )));
    }
    Ok((header, position))
}

fn geometry_for(header: &MetaHeader) -> Result<Geometry> {
    let n = header.ndims;
    if !(2..=3).contains(&n) {
        return Err(IoError::UnsupportedLayout(format!(
            "expected a 2D or 3D MetaImage, found {n} dimensions"
        )));
    }

    let mut size = [1usize; 3];
    let mut spacing = [1.0; 3];
    let mut origin = [0.0; 3];
    for axis in 0..n {
        size[axis] = header.dim_size[axis];
        spacing[axis] = header.spacing.get(axis).copied().unwrap_or(1.0);
        origin[axis] = header.offset.get(axis).copied().unwrap_or(0.0);
    }

    let mut direction = crate::model::IDENTITY_DIRECTION;
    if header.transform.len() == n * n {
        // TransformMatrix lists the direction column by column.
        for col in 0..n {
            for row in 0..n {
                direction[row * 3 + col] = header.transform[col * n + row];
            }
        }
    }

    let geometry = if n == 2 {
        Geometry::planar(size[0], size[1])
    } else {
        Geometry::new(size)
    };
    Ok(geometry
        .with_spacing(spacing)
        .with_origin(origin)
        .with_direction(direction))
}

fn header_for(volume: &Volume, data_file: String) -> MetaHeader {
    let geometry = &volume.geometry;
    let n = geometry.dimension;
    let mut transform = Vec::with_capacity(n * n);
    for col in 0..n {
        for row in 0..n {
            transform.push(geometry.direction[row * 3 + col]);
        }
    }
    MetaHeader {
        ndims: n,
        dim_size: geometry.size_vec(),
        spacing: geometry.spacing_vec(),
        offset: geometry.origin_vec(),
        transform,
        element_type: volume.pixel_type,
        channels: 1,
        msb: false,
        compressed: false,
        data_file,
    }
}

fn render_header(header: &MetaHeader) -> String {
    let bool_text = |value: bool| if value { "True" } else { "False" };
    let mut text = String::new();
    let mut push = |key: &str, value: String| {
        text.push_str(key);
        text.push_str(" = ");
        text.push_str(&value);
        text.push('\n');
    };
    push("ObjectType", "Image".to_string());
    push("NDims", header.ndims.to_string());
    push("BinaryData", "True".to_string());
    push("BinaryDataByteOrderMSB", bool_text(header.msb).to_string());
    push("CompressedData", bool_text(header.compressed).to_string());
    push("TransformMatrix", join_numbers(&header.transform));
    push("Offset", join_numbers(&header.offset));
    push("CenterOfRotation", vec!["0"; header.ndims].join(" "));
    push("ElementSpacing", join_numbers(&header.spacing));
    push("DimSize", join_numbers(&header.dim_size));
    push("ElementType", element_type_name(header.element_type).to_string());
    push("ElementDataFile", header.data_file.clone());
    text
}

fn element_type_for(value: &str) -> Result<PixelType> {
    let pixel_type = match value {
        "MET_CHAR" => PixelType::I8,
        "MET_UCHAR" => PixelType::U8,
        "MET_SHORT" => PixelType::I16,
        "MET_USHORT" => PixelType::U16,
        "MET_INT" | "MET_LONG" => PixelType::I32,
        "MET_UINT" | "MET_ULONG" => PixelType::U32,
        "MET_FLOAT" => PixelType::F32,
        "MET_DOUBLE" => PixelType::F64,
        other => return Err(IoError::UnsupportedLayout(format!("element type {other}"))),
    };
    Ok(pixel_type)
}

fn element_type_name(pixel_type: PixelType) -> &'static str {
    match pixel_type {
        PixelType::I8 => "MET_CHAR",
        PixelType::U8 => "MET_UCHAR",
        PixelType::I16 => "MET_SHORT",
        PixelType::U16 => "MET_USHORT",
        PixelType::I32 => "MET_INT",
        PixelType::U32 => "MET_UINT",
        PixelType::F32 => "MET_FLOAT",
        PixelType::F64 => "MET_DOUBLE",
    }
}

fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

fn decode_samples<E: ByteOrder>(
    raw: &[u8],
    pixel_type: PixelType,
    count: usize,
) -> Result<Vec<f64>> {
    let expected = count.checked_mul(pixel_type.size_of()).ok_or_else(|| {
        IoError::MalformedHeader(format!("{count} voxels overflow the payload size"))
    })?;
    if raw.len() < expected {
        return Err(IoError::UnsupportedLayout(format!(
            "voxel payload holds {} bytes, expected {expected}",
            raw.len()
        )));
    }
    let mut cursor = Cursor::new(&raw[..expected]);
    let samples = (0..count)
        .map(|_| match pixel_type {
            PixelType::I8 => cursor.read_i8().map(f64::from),
            PixelType::U8 => cursor.read_u8().map(f64::from),
            PixelType::I16 => cursor.read_i16::<E>().map(f64::from),
            PixelType::U16 => cursor.read_u16::<E>().map(f64::from),
            PixelType::I32 => cursor.read_i32::<E>().map(f64::from),
            PixelType::U32 => cursor.read_u32::<E>().map(f64::from),
            PixelType::F32 => cursor.read_f32::<E>().map(f64::from),
            PixelType::F64 => cursor.read_f64::<E>(),
        })
        .collect::<std::io::Result<Vec<_>>>()?;
    Ok(samples)
}

fn encode_samples(volume: &Volume) -> Result<Vec<u8>> {
    let mut payload = Vec::with_capacity(volume.data.len() * volume.pixel_type.size_of());
    for value in volume.data.iter().copied() {
        match volume.pixel_type {
            PixelType::I8 => payload.write_i8(value as i8)?,
            PixelType::U8 => payload.write_u8(value as u8)?,
            PixelType::I16 => payload.write_i16::<LittleEndian>(value as i16)?,
            PixelType::U16 => payload.write_u16::<LittleEndian>(value as u16)?,
            PixelType::I32 => payload.write_i32::<LittleEndian>(value as i32)?,
            PixelType::U32 => payload.write_u32::<LittleEndian>(value as u32)?,
            PixelType::F32 => payload.write_f32::<LittleEndian>(value as f32)?,
            PixelType::F64 => payload.write_f64::<LittleEndian>(value)?,
        }
    }
    Ok(payload)
}

fn raw_file_name(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| format!("{stem}.raw"))
        .ok_or_else(|| IoError::UnsupportedFormat(path.to_string_lossy().to_string()))
}

fn sibling(path: &Path, file_name: &str) -> PathBuf {
    path.parent()
        .map(|parent| parent.join(file_name))
        .unwrap_or_else(|| PathBuf::from(file_name))
}
