use nailstudio_core::design::{HexColor, NailFinish};

use crate::app::NailStudioApp;
use crate::panels::helpers::{enum_toggle, section_header};

pub(super) fn style_section(ui: &mut egui::Ui, app: &mut NailStudioApp) {
    section_header(ui, "Style & Color", None);
    ui.add_space(4.0);

    let design = &mut app.session.design;
    enum_toggle(ui, &mut design.finish, NailFinish::ALL);

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let mut rgb = design.color.to_array();
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            design.color = HexColor::new(rgb[0], rgb[1], rgb[2]);
        }
        ui.monospace(design.color.to_string());
    });
}
