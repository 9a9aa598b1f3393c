use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use nailstudio_core::io::image_io::{fetch_image, load_image, save_png};
use nailstudio_core::io::ImageRef;

use crate::convert::image_to_color_image;
use crate::messages::WorkerResult;

use super::{send, send_error, send_log};

pub(super) fn handle_load_image(
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match load_image(path) {
        Ok(image) => {
            let source = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            send_loaded(image, source, tx, ctx);
        }
        Err(e) => send_error(tx, ctx, format!("Failed to open {}: {e}", path.display())),
    }
}

pub(super) fn handle_load_sample(
    url: &str,
    timeout: Duration,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    send_log(tx, ctx, "Downloading sample photo...");
    match fetch_image(url, timeout) {
        Ok(image) => send_loaded(image, "Sample photo".into(), tx, ctx),
        Err(e) => send_error(tx, ctx, format!("Failed to load sample image: {e}")),
    }
}

pub(super) fn handle_save_image(
    path: &Path,
    image: &ImageRef,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match save_png(image, path) {
        Ok(()) => send(tx, ctx, WorkerResult::ImageSaved {
            path: path.to_path_buf(),
        }),
        Err(e) => send_error(tx, ctx, format!("Failed to save {}: {e}", path.display())),
    }
}

fn send_loaded(
    image: ImageRef,
    source: String,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match image_to_color_image(&image) {
        Ok(preview) => send(tx, ctx, WorkerResult::ImageLoaded {
            image,
            preview,
            source,
        }),
        Err(e) => send_error(tx, ctx, format!("{e:#}")),
    }
}
