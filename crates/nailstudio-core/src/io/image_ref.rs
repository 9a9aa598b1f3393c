use std::fmt;
use std::io::Cursor;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{DynamicImage, ImageFormat};

use crate::error::{NailStudioError, Result};

/// Encoded image formats accepted as input and returned by the generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageMime {
    Png,
    Jpeg,
    Webp,
    Gif,
    Bmp,
}

impl ImageMime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Webp => "webp",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
        }
    }

    pub fn image_format(&self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Webp => ImageFormat::WebP,
            Self::Gif => ImageFormat::Gif,
            Self::Bmp => ImageFormat::Bmp,
        }
    }

    /// Parse a MIME type string; `image/jpg` is accepted as an alias.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/webp" => Some(Self::Webp),
            "image/gif" => Some(Self::Gif),
            "image/bmp" => Some(Self::Bmp),
            _ => None,
        }
    }

    /// Identify the format from the leading magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        match image::guess_format(bytes).ok()? {
            ImageFormat::Png => Some(Self::Png),
            ImageFormat::Jpeg => Some(Self::Jpeg),
            ImageFormat::WebP => Some(Self::Webp),
            ImageFormat::Gif => Some(Self::Gif),
            ImageFormat::Bmp => Some(Self::Bmp),
            _ => None,
        }
    }
}

impl fmt::Display for ImageMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Basic facts about an encoded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub mime: ImageMime,
    pub width: u32,
    pub height: u32,
    pub byte_len: usize,
}

/// Immutable encoded image. Cloning shares the underlying bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageRef {
    bytes: Arc<[u8]>,
    mime: ImageMime,
}

impl fmt::Debug for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageRef")
            .field("mime", &self.mime)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

impl ImageRef {
    pub fn with_mime(bytes: impl Into<Arc<[u8]>>, mime: ImageMime) -> Self {
        Self {
            bytes: bytes.into(),
            mime,
        }
    }

    /// Wrap raw encoded bytes, detecting the format from their magic number.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let mime = ImageMime::sniff(&bytes).ok_or_else(|| {
            NailStudioError::UnsupportedImage("unrecognized image format".into())
        })?;
        Ok(Self::with_mime(bytes, mime))
    }

    /// Decode a base64 payload (no `data:` prefix).
    pub fn from_base64(data: &str, mime: ImageMime) -> Result<Self> {
        let bytes = STANDARD.decode(data.trim())?;
        Ok(Self::with_mime(bytes, mime))
    }

    /// Parse `data:image/<type>;base64,<payload>`.
    pub fn from_data_uri(uri: &str) -> Result<Self> {
        let unsupported = || {
            NailStudioError::UnsupportedImage(format!(
                "not an image data URI: {}",
                truncate(uri, 40)
            ))
        };

        let rest = uri.trim().strip_prefix("data:").ok_or_else(unsupported)?;
        let (header, payload) = rest.split_once(',').ok_or_else(unsupported)?;
        let mime_str = header.strip_suffix(";base64").ok_or_else(unsupported)?;
        let mime = ImageMime::from_mime(mime_str).ok_or_else(|| {
            NailStudioError::UnsupportedImage(format!("unsupported MIME type {mime_str}"))
        })?;
        Self::from_base64(payload, mime)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime(&self) -> ImageMime {
        self.mime
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.to_base64())
    }

    /// Decode to pixels.
    pub fn decode(&self) -> Result<DynamicImage> {
        Ok(image::load_from_memory_with_format(
            &self.bytes,
            self.mime.image_format(),
        )?)
    }

    /// Read width and height from the header without decoding pixels.
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        let reader =
            image::ImageReader::with_format(Cursor::new(&self.bytes[..]), self.mime.image_format());
        Ok(reader.into_dimensions()?)
    }

    pub fn info(&self) -> Result<ImageInfo> {
        let (width, height) = self.dimensions()?;
        Ok(ImageInfo {
            mime: self.mime,
            width,
            height,
            byte_len: self.len(),
        })
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
