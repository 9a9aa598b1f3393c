use nailstudio_core::session::WorkflowStep;

use crate::app::NailStudioApp;

use super::menu_bar::export_result;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(219, 39, 119);

/// Workflow steps on the left, Clear / Export on the right.
pub fn show(ctx: &egui::Context, app: &mut NailStudioApp) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let current = app.session.step();
            for (i, step) in WorkflowStep::ALL.iter().enumerate() {
                if i > 0 {
                    ui.label(egui::RichText::new("\u{203a}").color(egui::Color32::from_gray(110)));
                }
                let text = egui::RichText::new(format!("{} {}", step.number(), step));
                if *step == current {
                    ui.label(text.strong().color(ACCENT));
                } else {
                    ui.label(text.color(egui::Color32::from_gray(140)));
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if app.session.generated().is_some()
                    && ui.add_enabled(!app.ui_state.is_busy(), egui::Button::new("Export")).clicked()
                {
                    export_result(app);
                }
                if app.session.original().is_some() && ui.button("Clear").clicked() {
                    app.clear();
                }
            });
        });
        ui.add_space(4.0);
    });
}
