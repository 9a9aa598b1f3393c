use anyhow::{Context, Result};
use nailstudio_core::io::ImageRef;
use nailstudio_core::slider::Rect;

/// Longest side uploaded as a texture; larger photos are downscaled for display only.
const MAX_TEXTURE_SIDE: u32 = 4096;

/// Decode an image into an sRGBA egui ColorImage.
pub fn image_to_color_image(image: &ImageRef) -> Result<egui::ColorImage> {
    let mut decoded = image
        .decode()
        .with_context(|| format!("Failed to decode {} image", image.mime()))?;

    if decoded.width() > MAX_TEXTURE_SIDE || decoded.height() > MAX_TEXTURE_SIDE {
        decoded = decoded.thumbnail(MAX_TEXTURE_SIDE, MAX_TEXTURE_SIDE);
    }

    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

pub fn to_core_rect(rect: egui::Rect) -> Rect {
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub fn to_egui_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(rect.x, rect.y),
        egui::vec2(rect.width, rect.height),
    )
}

pub fn texture_size(texture: &egui::TextureHandle) -> [f32; 2] {
    let [w, h] = texture.size();
    [w as f32, h as f32]
}
