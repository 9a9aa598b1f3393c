use crate::app::{format_duration, NailStudioApp};

pub(super) fn actions_section(ui: &mut egui::Ui, app: &mut NailStudioApp) {
    ui.add_space(4.0);

    let generating = app.session.is_generating();
    let enabled = app.session.can_generate() && !app.ui_state.is_busy();
    let label = if generating { "Processing..." } else { "Generate" };

    let button = egui::Button::new(egui::RichText::new(label).strong())
        .min_size(egui::vec2(ui.available_width(), 32.0));
    if ui.add_enabled(enabled, button).clicked() {
        app.generate();
    }

    if app.session.original().is_none() {
        ui.small("Select a photo to start");
    } else if let Some(elapsed) = app.ui_state.last_generation {
        ui.small(format!("Last result in {}", format_duration(elapsed)));
    }
}
