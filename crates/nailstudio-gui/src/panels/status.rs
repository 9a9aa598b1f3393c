use crate::app::NailStudioApp;

pub fn show(ctx: &egui::Context, app: &mut NailStudioApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Progress bar (the model gives no progress, so it is indeterminate)
        let task = if app.session.is_generating() {
            Some("Designing".to_string())
        } else {
            app.ui_state.busy.map(|t| t.to_string())
        };
        if let Some(task) = task {
            ui.add(egui::ProgressBar::new(0.0).text(format!("{task}...")).animate(true));
        } else {
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area: fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(ref source) = app.ui_state.source_label {
                ui.label(source);
                ui.separator();
            }
            if let Some(size) = app.viewport.image_size() {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            if let Some(ref slider) = app.viewport.comparison {
                ui.label(format!("Split: {:.0}%", slider.split().percent()));
                ui.separator();
            }
            ui.label(format!("Model: {}", app.config.generator.model));
        });

        ui.add_space(2.0);
    });
}
