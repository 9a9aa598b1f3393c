use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};
use nailstudio_core::io::ImageRef;

/// Encode a solid-color RGB image in the given format.
pub fn encoded_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([200, 120, 140]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

pub fn png_ref(width: u32, height: u32) -> ImageRef {
    ImageRef::from_bytes(encoded_image(width, height, ImageFormat::Png)).unwrap()
}
