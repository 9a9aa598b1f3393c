mod actions;
mod pattern;
mod structure;
mod style;

const LEFT_PANEL_WIDTH: f32 = 280.0;

pub fn show(ctx: &egui::Context, app: &mut crate::app::NailStudioApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                structure::structure_section(ui, app);
                ui.separator();
                style::style_section(ui, app);
                ui.separator();
                pattern::pattern_section(ui, app);
                ui.separator();
                actions::actions_section(ui, app);
            });
        });
}
