use nailstudio_core::slider::fit_contain;

use crate::app::NailStudioApp;
use crate::convert::{texture_size, to_core_rect, to_egui_rect};

use super::comparison;
use super::helpers::pick_photo;

const HINT_HEIGHT: f32 = 24.0;

pub fn show(ctx: &egui::Context, app: &mut NailStudioApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        show_error_banner(ui, app);

        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let canvas = egui::Rect::from_min_max(rect.min, egui::pos2(rect.max.x, rect.max.y - HINT_HEIGHT));
        let hint_rect = egui::Rect::from_min_max(egui::pos2(rect.min.x, canvas.max.y), rect.max);

        if let Some(ref slider) = app.viewport.comparison {
            comparison::show(ui, canvas, slider);
            app.viewport.comparison_rect = Some(canvas);
            draw_hint(ui, hint_rect, "Drag slider to compare");
        } else if let Some(ref original) = app.viewport.original {
            let img_rect = to_egui_rect(fit_contain(to_core_rect(canvas), texture_size(original)));
            comparison::draw_texture(&ui.painter_at(canvas), original, img_rect);
            app.viewport.comparison_rect = None;
            draw_hint(ui, hint_rect, "Configure design & Generate");
        } else {
            app.viewport.comparison_rect = None;
            show_placeholder(ui, canvas, app);
        }

        if app.session.is_generating() {
            draw_generating_overlay(ui, canvas);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn show_error_banner(ui: &mut egui::Ui, app: &mut NailStudioApp) {
    let message = app
        .session
        .error()
        .map(str::to_owned)
        .or_else(|| app.ui_state.error.clone());
    let Some(message) = message else {
        return;
    };
    egui::Frame::NONE
        .fill(egui::Color32::from_rgb(254, 226, 226))
        .inner_margin(8.0)
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::from_rgb(185, 28, 28), message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Dismiss").clicked() {
                        app.session.dismiss_error();
                        app.ui_state.error = None;
                    }
                });
            });
        });
    ui.add_space(4.0);
}

fn show_placeholder(ui: &mut egui::Ui, canvas: egui::Rect, app: &mut NailStudioApp) {
    let busy = app.is_busy();
    ui.scope_builder(egui::UiBuilder::new().max_rect(canvas), |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(canvas.height() * 0.35);
            ui.label(
                egui::RichText::new("Upload a photo of your hand")
                    .size(18.0)
                    .color(egui::Color32::from_gray(160)),
            );
            ui.add_space(8.0);
            if ui.add_enabled(!busy, egui::Button::new("Select Photo")).clicked() {
                pick_photo(app);
            }
            if ui.add_enabled(!busy, egui::Button::new("Try Sample Photo")).clicked() {
                app.load_sample();
            }
            if busy {
                ui.add_space(8.0);
                ui.spinner();
            }
        });
    });
}

fn draw_hint(ui: &egui::Ui, rect: egui::Rect, text: &str) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(13.0),
        egui::Color32::from_gray(120),
    );
}

fn draw_generating_overlay(ui: &mut egui::Ui, canvas: egui::Rect) {
    ui.painter()
        .rect_filled(canvas, 0.0, egui::Color32::from_black_alpha(160));
    let spinner_rect = egui::Rect::from_center_size(canvas.center(), egui::vec2(32.0, 32.0));
    ui.put(spinner_rect, egui::Spinner::new().size(32.0));
    ui.painter().text(
        canvas.center() + egui::vec2(0.0, 32.0),
        egui::Align2::CENTER_TOP,
        "Designing...",
        egui::FontId::proportional(16.0),
        egui::Color32::WHITE,
    );
}
