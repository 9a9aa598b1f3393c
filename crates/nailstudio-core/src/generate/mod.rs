//! Image generation collaborators.

pub mod gemini;

use crate::design::NailDesign;
use crate::error::Result;
use crate::io::ImageRef;

pub use gemini::GeminiClient;

/// Applies a nail design to a photo of a hand.
///
/// Implementations block until the image is ready; hosts call them off the UI thread.
pub trait NailArtGenerator: Send {
    fn generate(&self, source: &ImageRef, design: &NailDesign) -> Result<ImageRef>;

    /// Short human-readable name for logs.
    fn name(&self) -> &str;
}
