mod context;
mod error;
mod extract_service;
mod info_service;
mod policy;
mod resize_service;


pub use context::AppContext;
pub use error::{AppError, Result};
pub use extract_service::{ExtractRequest, ExtractService};
pub use info_service::{InfoService, VolumeInfo};
pub use policy::{Permissive, Strict, ValidationPolicy};
pub use resize_service::{ResizeRequest, ResizeService};
