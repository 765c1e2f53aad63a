use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::commands::{default_center, extract_slices, normalize_min_max};
use crate::formats::{ImageIo, gray_image};
use crate::workflow::{ExtractReport, discover_volumes, ensure_output_dir, slice_output};

use super::{Result, ValidationPolicy};

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractRequest {
    /// Center in array-index order `[axis0, axis1, axis2]`; the midpoint of
    /// each axis when absent.
    pub location: Option<[i64; 3]>,
    pub count: i64,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct ExtractService<'a> {
    io: &'a dyn ImageIo,
    policy: &'a dyn ValidationPolicy,
}

impl<'a> ExtractService<'a> {
    pub fn new(io: &'a dyn ImageIo, policy: &'a dyn ValidationPolicy) -> Self {
        Self { io, policy }
    }

    pub fn extract_file(&self, source: &Path, request: &ExtractRequest) -> Result<ExtractReport> {
        info!("extracting {} slices per view from {}", request.count, source.display());
        let volume = self.io.load(source)?;
        self.policy.check_extract(&volume, request)?;

        let center = request
            .location
            .unwrap_or_else(|| default_center(volume.shape()));
        ensure_output_dir(&request.output_dir)?;

        let mut written = Vec::new();
        for slice in extract_slices(&volume, Some(center), request.count) {
            let path = slice_output(source, &request.output_dir, &slice.name())?;
            let image = gray_image(&normalize_min_max(&slice.plane))?;
            self.io.save_slice(&path, &image)?;
            debug!("wrote {}", path.display());
            written.push(path);
        }
        info!("wrote {} slices", written.len());

        Ok(ExtractReport {
            source: source.to_path_buf(),
            center,
            slices: written,
        })
    }

    pub fn extract_folder(
        &self,
        folder: &Path,
        request: &ExtractRequest,
    ) -> Result<Vec<ExtractReport>> {
        let sources = discover_volumes(folder)?;
        info!("found {} volumes in {}", sources.len(), folder.display());
        sources
            .iter()
            .map(|source| self.extract_file(source, request))
            .collect()
    }
}
