use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResizeReport {
    pub source: PathBuf,
    pub image: PathBuf,
    pub metadata: PathBuf,
    pub original_size: Vec<usize>,
    pub new_size: Vec<usize>,
    pub new_spacing: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractReport {
    pub source: PathBuf,
    pub center: [i64; 3],
    pub slices: Vec<PathBuf>,
}
