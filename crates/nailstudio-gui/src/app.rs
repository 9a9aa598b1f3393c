use std::sync::mpsc;

use nailstudio_core::config::StudioConfig;
use nailstudio_core::session::StudioSession;
use nailstudio_core::slider::{PointerSurface, SurfaceEvent};

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::pointer;
use crate::states::{BusyTask, UIState, ViewportState};
use crate::workers;

pub struct NailStudioApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: StudioSession,
    pub surface: PointerSurface,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub config: StudioConfig,
    pub show_about: bool,
}

impl NailStudioApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            session: StudioSession::new(),
            surface: PointerSurface::new(),
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            config: StudioConfig::default(),
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded {
                    image,
                    preview,
                    source,
                } => {
                    self.ui_state.busy = None;
                    self.ui_state.add_log(format!(
                        "Opened: {source} ({}x{}, {})",
                        preview.size[0],
                        preview.size[1],
                        image.mime()
                    ));
                    self.session.set_original(image);
                    let texture = ctx.load_texture("original", preview, egui::TextureOptions::LINEAR);
                    self.viewport.set_original(texture);
                    self.ui_state.source_label = Some(source);
                    self.ui_state.last_generation = None;
                    self.ui_state.error = None;
                }
                WorkerResult::GenerationComplete {
                    ticket,
                    image,
                    preview,
                    elapsed,
                } => {
                    if self.session.finish_generation(ticket, Ok(image)) {
                        let texture =
                            ctx.load_texture("generated", preview, egui::TextureOptions::LINEAR);
                        self.viewport.set_result(texture);
                        self.ui_state.last_generation = Some(elapsed);
                        self.ui_state
                            .add_log(format!("Design generated in {}", format_duration(elapsed)));
                    } else {
                        self.ui_state.add_log("Discarded result for a previous photo".into());
                    }
                }
                WorkerResult::GenerationFailed { ticket, message } => {
                    if self.session.finish_generation(ticket, Err(message.clone())) {
                        self.ui_state.add_log(format!("ERROR: {message}"));
                    }
                }
                WorkerResult::ConfigImported { path, config } => {
                    self.config = config;
                    self.ui_state
                        .add_log(format!("Config imported from {}", path.display()));
                }
                WorkerResult::ImageSaved { path } => {
                    self.ui_state.busy = None;
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::Cancelled { message } => {
                    self.ui_state.busy = None;
                    self.ui_state.add_log(message);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.busy = None;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                    self.ui_state.error = Some(message);
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Feed this frame's pointer input to the surface. Runs after the panels
    /// so the comparison rect is current and a press and release arriving in
    /// the same frame are seen in order.
    fn route_pointer_events(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|i| pointer::surface_events(&i.events));
        for event in events {
            if let SurfaceEvent::Press { x, y } = event {
                let inside = self
                    .viewport
                    .comparison_rect
                    .is_some_and(|r| r.contains(egui::pos2(x, y)));
                if inside && !self.show_about {
                    if let Some(ref mut slider) = self.viewport.comparison {
                        slider.press(x, &self.surface);
                    }
                }
            }
            self.surface.dispatch(event);
        }

        if self.surface.listener_count() > 0 {
            ctx.set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
            ctx.request_repaint();
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    pub fn is_busy(&self) -> bool {
        self.ui_state.is_busy() || self.session.is_generating()
    }

    pub fn load_sample(&mut self) {
        self.ui_state.busy = Some(BusyTask::LoadingPhoto);
        self.send_command(WorkerCommand::LoadSample {
            url: self.config.sample.url.clone(),
            timeout: self.config.generator.timeout(),
        });
    }

    pub fn generate(&mut self) {
        if let Some(request) = self.session.begin_generation() {
            self.ui_state.add_log(format!(
                "Designing: {} / {} / {} / {}",
                request.design.shape,
                request.design.length,
                request.design.finish,
                request.design.color
            ));
            self.send_command(WorkerCommand::Generate {
                request,
                generator: self.config.generator.clone(),
            });
        }
    }

    /// Forget the photo and any result; the design stays.
    pub fn clear(&mut self) {
        self.session.clear();
        self.viewport.clear();
        self.ui_state.source_label = None;
        self.ui_state.last_generation = None;
        self.ui_state.error = None;
        self.ui_state.add_log("Cleared".into());
    }
}

impl eframe::App for NailStudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::header::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        self.route_pointer_events(ctx);

        // About dialog
        if self.show_about {
            egui::Window::new("About Nail Studio")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Nail Studio");
                        ui.label("AI nail-art try-on");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.label(format!("Model: {}", self.config.generator.model));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

pub(crate) fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}min")
    }
}
