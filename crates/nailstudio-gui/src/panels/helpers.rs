use crate::app::NailStudioApp;
use crate::messages::WorkerCommand;

/// Show a ComboBox for enum selection. Returns `true` if the value changed.
pub(crate) fn enum_combo<T: PartialEq + Copy + ToString>(
    ui: &mut egui::Ui,
    label: &str,
    current: &mut T,
    options: &[T],
) -> bool {
    let resp = egui::ComboBox::from_label(label)
        .selected_text(current.to_string())
        .show_ui(ui, |ui| {
            let mut changed = false;
            for &choice in options {
                if ui
                    .selectable_value(current, choice, choice.to_string())
                    .changed()
                {
                    changed = true;
                }
            }
            changed
        });
    resp.inner == Some(true)
}

/// Row of toggle buttons, one per option. Returns `true` if the value changed.
pub(crate) fn enum_toggle<T: PartialEq + Copy + ToString>(
    ui: &mut egui::Ui,
    current: &mut T,
    options: &[T],
) -> bool {
    let mut changed = false;
    ui.horizontal_wrapped(|ui| {
        for &choice in options {
            if ui
                .selectable_value(current, choice, choice.to_string())
                .changed()
            {
                changed = true;
            }
        }
    });
    changed
}

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}

/// Photo file dialog on its own thread; the choice goes straight to the worker.
pub(crate) fn pick_photo(app: &NailStudioApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "webp", "gif", "bmp"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadImage { path });
        }
    });
}
