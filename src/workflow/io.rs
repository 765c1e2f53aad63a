use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::ResizeMetadata;

use super::Result;

pub fn save_metadata(path: impl AsRef<Path>, metadata: &ResizeMetadata) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, metadata)?;
    writer.flush()?;
    Ok(())
}

pub fn load_metadata(path: impl AsRef<Path>) -> Result<ResizeMetadata> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn ensure_output_dir(path: impl AsRef<Path>) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}
