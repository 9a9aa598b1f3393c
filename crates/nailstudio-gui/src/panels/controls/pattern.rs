use nailstudio_core::presets::builtin_presets;

use crate::app::NailStudioApp;
use crate::panels::helpers::section_header;

pub(super) fn pattern_section(ui: &mut egui::Ui, app: &mut NailStudioApp) {
    let status = app.session.design.pattern().is_some().then_some("custom");
    section_header(ui, "AI Custom Design", status);
    ui.add_space(4.0);

    ui.add(
        egui::TextEdit::multiline(&mut app.session.design.pattern_prompt)
            .hint_text("e.g. \"Glitter gradient from silver to gold\"")
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(4.0);
    ui.small("Presets");
    ui.horizontal_wrapped(|ui| {
        for preset in builtin_presets() {
            if ui
                .button(preset.name)
                .on_hover_text(preset.description)
                .clicked()
            {
                app.session.apply_preset(&preset);
                app.ui_state.add_log(format!("Preset applied: {}", preset.name));
            }
        }
    });
}
