mod error;
mod resample;
mod slices;
mod util;

#[cfg(test)]
mod tests;

pub use error::{OpsError, Result};
pub use resample::{ResizePlan, resample_linear, resize_volume};
pub use slices::{
    ExtractedSlice, default_center, extract_slices, normalize_min_max, slice_window,
};
