use std::path::Path;

use super::{IoError, Result};

/// Volume formats understood by the default codec, longest suffix first so
/// that `nii.gz` wins over a bare `gz`.
pub const VOLUME_FORMATS: &[&str] = &["nii.gz", "nii", "mha", "mhd"];

/// Splits a file name into its stem and format suffix. `scan.nii.gz` yields
/// `("scan", "nii.gz")`; otherwise the last extension is used.
pub fn split_format(path: &Path) -> Option<(String, String)> {
    let file_name = path.file_name()?.to_str()?;
    let lowered = file_name.to_ascii_lowercase();
    for compound in VOLUME_FORMATS.iter().filter(|format| format.contains('.')) {
        let suffix = format!(".{compound}");
        if lowered.ends_with(&suffix) && lowered.len() > suffix.len() {
            let stem = &file_name[..file_name.len() - suffix.len()];
            return Some((stem.to_string(), (*compound).to_string()));
        }
    }
    let stem = path.file_stem()?.to_str()?;
    let extension = path.extension()?.to_str()?;
    Some((stem.to_string(), extension.to_ascii_lowercase()))
}

pub(crate) fn format_of(path: &Path) -> Result<String> {
    split_format(path)
        .map(|(_, format)| format)
        .ok_or_else(|| IoError::UnsupportedFormat(path.to_string_lossy().to_string()))
}

/// Lowercases a user-supplied format and strips a leading dot.
pub fn normalize_format(format: &str) -> String {
    format.trim().trim_start_matches('.').to_ascii_lowercase()
}

pub fn is_volume_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| {
            let lowered = name.to_ascii_lowercase();
            VOLUME_FORMATS
                .iter()
                .any(|format| lowered.ends_with(&format!(".{format}")))
        })
        .unwrap_or(false)
}

pub(crate) fn parse_numbers<T: std::str::FromStr>(key: &str, value: &str) -> Result<Vec<T>> {
    value
        .split_whitespace()
        .map(|token| {
            token.parse::<T>().map_err(|_| {
                IoError::MalformedHeader(format!("`{key}` has a non-numeric entry `{token}`"))
            })
        })
        .collect()
}

pub(crate) fn join_numbers<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
