use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "med-image-utils",
    version,
    about = "Resize medical volumes and extract 2D slices from them"
)]
pub(super) struct Cli {
    /// Reject requests the algorithms would otherwise clip or reinterpret.
    #[arg(long, global = true)]
    pub(super) strict: bool,
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Resample images onto a new voxel grid covering the same physical extent.
    #[command(name = "resize")]
    Resize {
        #[command(flatten)]
        source: SourceArgs,
        /// Target size as a JSON array, e.g. `[128,128,64]`.
        #[arg(long = "newSize", value_parser = parse_sizes)]
        new_size: TargetSize,
        #[arg(long = "outputPath")]
        output_path: PathBuf,
        /// Output suffix such as `nii.gz` or `mha`; defaults to the input's.
        #[arg(long = "outputFormat")]
        output_format: Option<String>,
    },
    /// Write axial, coronal and sagittal PNG slices around a location.
    #[command(name = "extract2D")]
    Extract2D {
        #[command(flatten)]
        source: SourceArgs,
        /// Center as a JSON array of array indices, e.g. `[40,128,128]`.
        #[arg(long, value_parser = parse_location)]
        location: Option<[i64; 3]>,
        #[arg(long = "N", default_value_t = 1, allow_negative_numbers = true)]
        count: i64,
        #[arg(long = "outputPath")]
        output_path: PathBuf,
    },
    Info {
        input: PathBuf,
    },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub(super) struct SourceArgs {
    #[arg(long = "imagePath")]
    pub(super) image_path: Option<PathBuf>,
    #[arg(long = "folderPath")]
    pub(super) folder_path: Option<PathBuf>,
}

/// Voxel counts from a single `--newSize` JSON array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct TargetSize(pub(super) Vec<usize>);

pub(super) fn parse_sizes(raw: &str) -> Result<TargetSize, String> {
    serde_json::from_str(raw)
        .map(TargetSize)
        .map_err(|error| format!("expected a JSON array of sizes: {error}"))
}

pub(super) fn parse_location(raw: &str) -> Result<[i64; 3], String> {
    serde_json::from_str(raw)
        .map_err(|error| format!("expected a JSON array of three indices: {error}"))
}
