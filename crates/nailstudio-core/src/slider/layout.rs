use crate::consts::{AFTER_LABEL, BEFORE_LABEL};

use super::geometry::{fit_contain, Rect};
use super::tracker::SplitPosition;

/// Distance of the layer labels from the viewport's bottom corners.
pub const LABEL_INSET: f32 = 16.0;

/// A text label pinned to a corner of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelAnchor {
    pub text: &'static str,
    pub x: f32,
    pub y: f32,
    /// True when `x` is the label's right edge rather than its left edge.
    pub right_aligned: bool,
}

/// Screen-space geometry for one frame of the comparison view.
///
/// Both image rects are fitted against the full viewport. The before layer is
/// then only clipped, never re-fitted, so dragging the handle slides a window
/// over a fixed image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonLayout {
    pub viewport: Rect,
    pub after_image: Rect,
    pub before_image: Rect,
    pub before_clip: Rect,
    pub handle_x: f32,
    pub before_label: LabelAnchor,
    pub after_label: LabelAnchor,
}

impl ComparisonLayout {
    pub fn compute(
        viewport: Rect,
        before_size: [f32; 2],
        after_size: [f32; 2],
        split: SplitPosition,
    ) -> Self {
        let after_image = fit_contain(viewport, after_size);
        let before_image = fit_contain(viewport, before_size);

        let revealed = viewport.width.max(0.0) * split.fraction();
        let before_clip = Rect::new(viewport.x, viewport.y, revealed, viewport.height);
        let handle_x = viewport.x + revealed;

        let label_y = viewport.bottom() - LABEL_INSET;
        Self {
            viewport,
            after_image,
            before_image,
            before_clip,
            handle_x,
            before_label: LabelAnchor {
                text: BEFORE_LABEL,
                x: viewport.left() + LABEL_INSET,
                y: label_y,
                right_aligned: false,
            },
            after_label: LabelAnchor {
                text: AFTER_LABEL,
                x: viewport.right() - LABEL_INSET,
                y: label_y,
                right_aligned: true,
            },
        }
    }
}
