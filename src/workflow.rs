mod discover;
mod error;
mod io;
mod naming;
mod report;


pub use discover::discover_volumes;
pub use error::{Result, WorkflowError};
pub use io::{ensure_output_dir, load_metadata, save_metadata};
pub use naming::{ResizeOutputs, resize_outputs, slice_output};
pub use report::{ExtractReport, ResizeReport};
