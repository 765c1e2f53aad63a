use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::commands::{ResizePlan, resample_linear};
use crate::formats::ImageIo;
use crate::model::ResizeMetadata;
use crate::workflow::{
    ResizeReport, discover_volumes, ensure_output_dir, resize_outputs, save_metadata,
};

use super::{Result, ValidationPolicy};

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeRequest {
    /// Target voxel counts `[x, y]` or `[x, y, z]`.
    pub new_size: Vec<usize>,
    pub output_dir: PathBuf,
    pub output_format: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct ResizeService<'a> {
    io: &'a dyn ImageIo,
    policy: &'a dyn ValidationPolicy,
}

impl<'a> ResizeService<'a> {
    pub fn new(io: &'a dyn ImageIo, policy: &'a dyn ValidationPolicy) -> Self {
        Self { io, policy }
    }

    pub fn resize_file(&self, source: &Path, request: &ResizeRequest) -> Result<ResizeReport> {
        info!("resizing {} to {:?}", source.display(), request.new_size);
        let volume = self.io.load(source)?;
        self.policy.check_resize(&volume, request)?;

        let plan = ResizePlan::new(&volume.geometry, &request.new_size)?;
        debug!(
            "spacing {:?} -> {:?}",
            volume.geometry.spacing, plan.spacing
        );
        let resized = resample_linear(&volume, &plan)?;
        let metadata = ResizeMetadata::from_geometry(&volume.geometry);

        let outputs = resize_outputs(
            source,
            &request.output_dir,
            request.output_format.as_deref(),
        )?;
        ensure_output_dir(&request.output_dir)?;
        self.io.save(&outputs.image, &resized)?;
        save_metadata(&outputs.metadata, &metadata)?;
        info!("wrote {}", outputs.image.display());

        Ok(ResizeReport {
            source: source.to_path_buf(),
            image: outputs.image,
            metadata: outputs.metadata,
            original_size: metadata.original_size,
            new_size: resized.geometry.size_vec(),
            new_spacing: resized.geometry.spacing_vec(),
        })
    }

    /// Resizes every volume in `folder` in file-name order, stopping at the
    /// first failure.
    pub fn resize_folder(&self, folder: &Path, request: &ResizeRequest) -> Result<Vec<ResizeReport>> {
        let sources = discover_volumes(folder)?;
        info!("found {} volumes in {}", sources.len(), folder.display());
        sources
            .iter()
            .map(|source| self.resize_file(source, request))
            .collect()
    }
}
