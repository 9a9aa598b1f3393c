use nailstudio_core::slider::{ComparisonSlider, LabelAnchor, ViewportRect};

use crate::convert::{texture_size, to_core_rect, to_egui_rect};

const HANDLE_WIDTH: f32 = 2.0;
const GRIP_RADIUS: f32 = 16.0;
const LABEL_PADDING: egui::Vec2 = egui::vec2(8.0, 4.0);

/// Paint the before/after comparison into `rect`.
///
/// Records `rect` as the slider's live bounds so pointer events dispatched
/// later this frame convert against what is on screen.
pub(super) fn show(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    slider: &ComparisonSlider<egui::TextureHandle>,
) {
    slider.record_viewport(ViewportRect::new(rect.left(), rect.width()));
    let layout = slider.layout(
        to_core_rect(rect),
        texture_size(slider.before()),
        texture_size(slider.after()),
    );

    let response = ui.allocate_rect(rect, egui::Sense::hover());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
    }

    let painter = ui.painter_at(rect);
    draw_texture(&painter, slider.after(), to_egui_rect(layout.after_image));

    let clip = to_egui_rect(layout.before_clip).intersect(painter.clip_rect());
    let before_painter = painter.with_clip_rect(clip);
    draw_texture(&before_painter, slider.before(), to_egui_rect(layout.before_image));
    draw_label(&before_painter, &layout.before_label);

    draw_label(&painter, &layout.after_label);
    draw_handle(&painter, layout.handle_x, rect);
}

pub(super) fn draw_texture(painter: &egui::Painter, texture: &egui::TextureHandle, rect: egui::Rect) {
    painter.image(
        texture.id(),
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_label(painter: &egui::Painter, anchor: &LabelAnchor) {
    let galley = painter.layout_no_wrap(
        anchor.text.to_string(),
        egui::FontId::proportional(12.0),
        egui::Color32::WHITE,
    );
    let align = if anchor.right_aligned {
        egui::Align2::RIGHT_BOTTOM
    } else {
        egui::Align2::LEFT_BOTTOM
    };
    let text_rect = align.anchor_size(egui::pos2(anchor.x, anchor.y), galley.size());
    painter.rect_filled(
        text_rect.expand2(LABEL_PADDING),
        4.0,
        egui::Color32::from_black_alpha(150),
    );
    painter.galley(text_rect.min, galley, egui::Color32::WHITE);
}

/// Vertical bar with a round grip at mid-height.
fn draw_handle(painter: &egui::Painter, x: f32, rect: egui::Rect) {
    painter.vline(x, rect.y_range(), egui::Stroke::new(HANDLE_WIDTH, egui::Color32::WHITE));

    let c = egui::pos2(x, rect.center().y);
    painter.circle_filled(c, GRIP_RADIUS, egui::Color32::WHITE);
    painter.circle_stroke(
        c,
        GRIP_RADIUS,
        egui::Stroke::new(1.0, egui::Color32::from_black_alpha(60)),
    );

    let arrow = egui::Color32::from_gray(80);
    for dir in [-1.0f32, 1.0] {
        let points = vec![
            c + egui::vec2(dir * 4.0, -5.0),
            c + egui::vec2(dir * 4.0, 5.0),
            c + egui::vec2(dir * 9.0, 0.0),
        ];
        painter.add(egui::Shape::convex_polygon(points, arrow, egui::Stroke::NONE));
    }
}
