pub mod image_io;
pub mod image_ref;

pub use image_ref::{ImageInfo, ImageMime, ImageRef};
