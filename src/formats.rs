mod api;
mod codec;
mod error;
mod metaimage;
mod nifti_io;
mod raster;
mod util;


pub use api::{read_volume, supported_formats, write_slice, write_volume};
pub use codec::{DefaultImageIo, ImageIo};
pub use error::{IoError, Result};
pub use raster::gray_image;
pub use util::{VOLUME_FORMATS, is_volume_file, normalize_format, split_format};
