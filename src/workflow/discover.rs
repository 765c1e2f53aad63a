use std::fs;
use std::path::{Path, PathBuf};

use crate::formats::is_volume_file;

use super::Result;

/// Volume files directly inside `folder`, sorted by file name.
pub fn discover_volumes(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && is_volume_file(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|left, right| left.file_name().cmp(&right.file_name()));
    Ok(paths)
}
