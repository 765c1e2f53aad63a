use std::fmt;

use serde::{Deserialize, Serialize};

/// Anatomical viewing plane, each perpendicular to one array axis of a
/// `[z, y, x]` volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Axial,
    Coronal,
    Sagittal,
}

impl View {
    pub const ALL: [View; 3] = [View::Axial, View::Coronal, View::Sagittal];

    pub fn array_axis(self) -> usize {
        match self {
            View::Axial => 0,
            View::Coronal => 1,
            View::Sagittal => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            View::Axial => "axial",
            View::Coronal => "coronal",
            View::Sagittal => "sagittal",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PixelType {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    #[default]
    F32,
    F64,
}

impl PixelType {
    pub fn is_integer(self) -> bool {
        !matches!(self, PixelType::F32 | PixelType::F64)
    }

    pub fn size_of(self) -> usize {
        match self {
            PixelType::I8 | PixelType::U8 => 1,
            PixelType::I16 | PixelType::U16 => 2,
            PixelType::I32 | PixelType::U32 | PixelType::F32 => 4,
            PixelType::F64 => 8,
        }
    }

    /// Brings an interpolated value into the representable range of this
    /// pixel type. Integer types saturate and truncate toward zero.
    pub fn cast(self, value: f64) -> f64 {
        match self {
            PixelType::I8 => f64::from(value as i8),
            PixelType::U8 => f64::from(value as u8),
            PixelType::I16 => f64::from(value as i16),
            PixelType::U16 => f64::from(value as u16),
            PixelType::I32 => f64::from(value as i32),
            PixelType::U32 => f64::from(value as u32),
            PixelType::F32 => f64::from(value as f32),
            PixelType::F64 => value,
        }
    }
}
