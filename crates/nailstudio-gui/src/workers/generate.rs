use std::sync::mpsc;
use std::time::Instant;

use nailstudio_core::config::GeneratorConfig;
use nailstudio_core::generate::{GeminiClient, NailArtGenerator};
use nailstudio_core::session::GenerationRequest;

use crate::convert::image_to_color_image;
use crate::messages::WorkerResult;

use super::{send, send_log};

pub(super) fn handle_generate(
    request: GenerationRequest,
    generator: &GeneratorConfig,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let ticket = request.ticket;
    let fail = |message: String| {
        send(tx, ctx, WorkerResult::GenerationFailed { ticket, message });
    };

    let client = match GeminiClient::new(generator) {
        Ok(c) => c,
        Err(e) => return fail(e.to_string()),
    };

    send_log(tx, ctx, format!("Generating with {}...", client.name()));
    let start = Instant::now();

    let image = match client.generate(&request.source, &request.design) {
        Ok(image) => image,
        Err(e) => return fail(e.to_string()),
    };

    match image_to_color_image(&image) {
        Ok(preview) => send(tx, ctx, WorkerResult::GenerationComplete {
            ticket,
            image,
            preview,
            elapsed: start.elapsed(),
        }),
        Err(e) => fail(format!("{e:#}")),
    }
}
