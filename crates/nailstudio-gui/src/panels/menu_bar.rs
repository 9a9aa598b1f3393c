use nailstudio_core::config::StudioConfig;
use nailstudio_core::io::image_io::default_export_name;

use crate::app::NailStudioApp;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::states::BusyTask;

use super::helpers::pick_photo;

pub fn show(ctx: &egui::Context, app: &mut NailStudioApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Photo...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    pick_photo(app);
                }

                if ui.add_enabled(!app.is_busy(), egui::Button::new("Try Sample Photo")).clicked() {
                    ui.close();
                    app.load_sample();
                }

                let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                let can_export = app.session.generated().is_some();
                if ui.add_enabled(can_export, egui::Button::new("Export...").shortcut_text(ctx.format_shortcut(&save_shortcut))).clicked() {
                    ui.close();
                    export_result(app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            pick_photo(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S))) {
            export_result(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Ask where to save the generated image, then hand it to the worker.
pub(crate) fn export_result(app: &mut NailStudioApp) {
    let Some(image) = app.session.generated().cloned() else {
        return;
    };
    app.ui_state.busy = Some(BusyTask::Saving);

    let cmd_tx = app.cmd_tx.clone();
    let result_tx = app.result_tx.clone();
    let file_name = default_export_name(&app.config.export.file_prefix);
    let directory = app.config.export.directory.clone();
    std::thread::spawn(move || {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(&file_name);
        if let Some(dir) = directory {
            dialog = dialog.set_directory(dir);
        }
        match dialog.save_file() {
            Some(path) => {
                let _ = cmd_tx.send(WorkerCommand::SaveImage { path, image });
            }
            None => {
                let _ = result_tx.send(WorkerResult::Cancelled {
                    message: "Export cancelled".into(),
                });
            }
        }
    });
}

fn import_config(app: &mut NailStudioApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let result = match StudioConfig::load(&path) {
            Ok(config) => WorkerResult::ConfigImported { path, config },
            Err(e) => WorkerResult::Error {
                message: format!("Failed to import {}: {e}", path.display()),
            },
        };
        let _ = result_tx.send(result);
    });
}

fn export_config(app: &mut NailStudioApp) {
    let config = app.config.clone();
    let result_tx = app.result_tx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("nailstudio.toml")
            .save_file()
        {
            let written = config
                .to_toml()
                .map_err(|e| e.to_string())
                .and_then(|content| std::fs::write(&path, content).map_err(|e| e.to_string()));
            let result = match written {
                Ok(()) => WorkerResult::Log {
                    message: format!("Config exported to {}", path.display()),
                },
                Err(message) => WorkerResult::Error { message },
            };
            let _ = result_tx.send(result);
        }
    });
}
