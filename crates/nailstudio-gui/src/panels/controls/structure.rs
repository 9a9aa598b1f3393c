use nailstudio_core::design::{NailLength, NailShape};

use crate::app::NailStudioApp;
use crate::panels::helpers::{enum_combo, section_header};

pub(super) fn structure_section(ui: &mut egui::Ui, app: &mut NailStudioApp) {
    section_header(ui, "Structure", None);
    ui.add_space(4.0);

    let design = &mut app.session.design;
    enum_combo(ui, "Shape", &mut design.shape, NailShape::ALL);
    enum_combo(ui, "Length", &mut design.length, NailLength::ALL);
}
