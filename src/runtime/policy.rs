use std::fmt::Debug;

use crate::formats::{normalize_format, supported_formats};
use crate::model::Volume;

use super::{AppError, ExtractRequest, ResizeRequest, Result};

/// Request checks applied after a volume is loaded and before the resize or
/// slice algorithms run.
pub trait ValidationPolicy: Debug {
    fn check_resize(&self, volume: &Volume, request: &ResizeRequest) -> Result<()>;
    fn check_extract(&self, volume: &Volume, request: &ExtractRequest) -> Result<()>;
}

/// Accepts every request; only arithmetic that cannot be carried out (such
/// as a zero target size) fails, inside the algorithms themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct Permissive;

impl ValidationPolicy for Permissive {
    fn check_resize(&self, _volume: &Volume, _request: &ResizeRequest) -> Result<()> {
        Ok(())
    }

    fn check_extract(&self, _volume: &Volume, _request: &ExtractRequest) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Strict;

impl ValidationPolicy for Strict {
    fn check_resize(&self, volume: &Volume, request: &ResizeRequest) -> Result<()> {
        let dimension = volume.geometry.dimension;
        if request.new_size.len() > dimension {
            return Err(AppError::Rejected(format!(
                "target size has {} entries for a {dimension}D image",
                request.new_size.len()
            )));
        }
        if request.new_size.contains(&0) {
            return Err(AppError::Rejected(
                "target size entries must be positive".to_string(),
            ));
        }
        if let Some(format) = &request.output_format {
            let format = normalize_format(format);
            if !supported_formats().contains(&format.as_str()) {
                return Err(AppError::Rejected(format!(
                    "output format `{format}` is not one of {:?}",
                    supported_formats()
                )));
            }
        }
        Ok(())
    }

    fn check_extract(&self, volume: &Volume, request: &ExtractRequest) -> Result<()> {
        if request.count < 1 {
            return Err(AppError::Rejected(format!(
                "slice count must be at least 1, found {}",
                request.count
            )));
        }
        if let Some(location) = request.location {
            let shape = volume.shape();
            for (axis, (index, extent)) in location.iter().zip(shape).enumerate() {
                if *index < 0 || *index >= extent as i64 {
                    return Err(AppError::Rejected(format!(
                        "location index {index} on axis {axis} is outside 0..{extent}"
                    )));
                }
            }
        }
        Ok(())
    }
}

