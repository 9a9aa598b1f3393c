use std::path::PathBuf;
use std::time::Duration;

use nailstudio_core::config::{GeneratorConfig, StudioConfig};
use nailstudio_core::io::ImageRef;
use nailstudio_core::session::GenerationRequest;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Read a photo from disk.
    LoadImage { path: PathBuf },

    /// Download the sample hand photo.
    LoadSample { url: String, timeout: Duration },

    /// Run one generation against the configured model.
    Generate {
        request: GenerationRequest,
        generator: GeneratorConfig,
    },

    /// Export an image as PNG.
    SaveImage { path: PathBuf, image: ImageRef },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// A new original photo, already decoded for display.
    ImageLoaded {
        image: ImageRef,
        preview: egui::ColorImage,
        source: String,
    },

    GenerationComplete {
        ticket: u64,
        image: ImageRef,
        preview: egui::ColorImage,
        elapsed: Duration,
    },
    GenerationFailed {
        ticket: u64,
        message: String,
    },

    ConfigImported {
        path: PathBuf,
        config: StudioConfig,
    },
    ImageSaved {
        path: PathBuf,
    },
    /// A dialog was dismissed; clears any busy state.
    Cancelled {
        message: String,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
