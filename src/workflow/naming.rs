use std::path::{Path, PathBuf};

use crate::formats::{normalize_format, split_format};

use super::{Result, WorkflowError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeOutputs {
    pub image: PathBuf,
    pub metadata: PathBuf,
}

/// `<base>_resized.<format>` and `<base>_resized_meta.json` under
/// `output_dir`; the format defaults to the source's own suffix.
pub fn resize_outputs(
    source: &Path,
    output_dir: &Path,
    output_format: Option<&str>,
) -> Result<ResizeOutputs> {
    let (base, source_format) = source_parts(source)?;
    let format = output_format
        .map(normalize_format)
        .filter(|format| !format.is_empty())
        .unwrap_or(source_format);
    Ok(ResizeOutputs {
        image: output_dir.join(format!("{base}_resized.{format}")),
        metadata: output_dir.join(format!("{base}_resized_meta.json")),
    })
}

/// `<base>_<slice name>.png` under `output_dir`.
pub fn slice_output(source: &Path, output_dir: &Path, slice_name: &str) -> Result<PathBuf> {
    let (base, _) = source_parts(source)?;
    Ok(output_dir.join(format!("{base}_{slice_name}.png")))
}

fn source_parts(source: &Path) -> Result<(String, String)> {
    split_format(source).ok_or_else(|| WorkflowError::UnnamedSource(source.to_path_buf()))
}
