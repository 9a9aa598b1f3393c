use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use image::ImageFormat;
use tracing::{debug, info};

use crate::error::{NailStudioError, Result};
use crate::io::image_ref::{ImageMime, ImageRef};

/// Load an image file, rejecting anything that does not decode.
pub fn load_image(path: &Path) -> Result<ImageRef> {
    let bytes = std::fs::read(path)?;
    let image = ImageRef::from_bytes(bytes)?;
    let (w, h) = image.dimensions()?;
    debug!(path = %path.display(), mime = %image.mime(), w, h, "image loaded");
    Ok(image)
}

/// Download an image over HTTP(S).
pub fn fetch_image(url: &str, timeout: Duration) -> Result<ImageRef> {
    let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(NailStudioError::Api {
            status: status.as_u16(),
            message: format!("failed to fetch {url}"),
        });
    }

    let bytes = response.bytes()?.to_vec();
    let image = ImageRef::from_bytes(bytes)?;
    image.dimensions()?;
    info!(url, bytes = image.len(), "sample image downloaded");
    Ok(image)
}

/// Write an image as PNG, transcoding when it is stored in another format.
pub fn save_png(image: &ImageRef, path: &Path) -> Result<()> {
    if image.mime() == ImageMime::Png {
        std::fs::write(path, image.bytes())?;
    } else {
        image.decode()?.save_with_format(path, ImageFormat::Png)?;
    }
    info!(path = %path.display(), "image saved");
    Ok(())
}

/// `<prefix>-<unix millis>.png`
pub fn export_file_name(prefix: &str, unix_millis: u128) -> String {
    format!("{prefix}-{unix_millis}.png")
}

/// Export file name stamped with the current time.
pub fn default_export_name(prefix: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    export_file_name(prefix, millis)
}
