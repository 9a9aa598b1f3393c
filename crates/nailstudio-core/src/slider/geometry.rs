use std::cell::Cell;
use std::rc::Rc;

use crate::consts::MAX_SPLIT_PERCENT;

/// Horizontal extent of the comparison region in absolute pointer coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportRect {
    pub left: f32,
    pub width: f32,
}

impl ViewportRect {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Zero-width, negative or non-finite extents cannot map a pointer to a percentage.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.width.is_finite() && self.left.is_finite())
    }

    /// Convert an absolute x coordinate to a percentage of the width, clamped to
    /// `[0, 100]`. Returns `None` for a degenerate rect or a NaN coordinate.
    pub fn percentage_at(&self, x: f32) -> Option<f32> {
        if self.is_degenerate() || x.is_nan() {
            return None;
        }
        let clamped = (x - self.left).min(self.width).max(0.0);
        Some(clamped / self.width * MAX_SPLIT_PERCENT)
    }
}

/// Axis-aligned rectangle in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.left() && px <= self.right() && py >= self.top() && py <= self.bottom()
    }

    /// Horizontal extent used by the drag tracker.
    pub fn horizontal(&self) -> ViewportRect {
        ViewportRect::new(self.x, self.width)
    }
}

/// Largest rect with the image's aspect ratio that fits inside `container`,
/// centered on both axes (CSS `object-fit: contain`).
pub fn fit_contain(container: Rect, image_size: [f32; 2]) -> Rect {
    let [img_w, img_h] = image_size;
    let (cx, cy) = container.center();
    if !(img_w > 0.0 && img_h > 0.0) || container.width <= 0.0 || container.height <= 0.0 {
        return Rect::new(cx, cy, 0.0, 0.0);
    }

    let scale = (container.width / img_w).min(container.height / img_h);
    let w = img_w * scale;
    let h = img_h * scale;
    Rect::new(cx - w / 2.0, cy - h / 2.0, w, h)
}

/// On-demand access to the current viewport rectangle.
///
/// Implementations must read the live layout rather than a value captured when
/// a drag started; layout may change between (and during) drags.
pub trait RectSource {
    fn rectangle(&self) -> Option<ViewportRect>;
}

impl RectSource for ViewportRect {
    fn rectangle(&self) -> Option<ViewportRect> {
        Some(*self)
    }
}

impl RectSource for Option<ViewportRect> {
    fn rectangle(&self) -> Option<ViewportRect> {
        *self
    }
}

/// Shared cell the renderer writes the laid-out rect into on every pass, and
/// the tracker reads from at event time.
#[derive(Clone, Debug, Default)]
pub struct LayoutProbe {
    rect: Rc<Cell<Option<ViewportRect>>>,
}

impl LayoutProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, rect: ViewportRect) {
        self.rect.set(Some(rect));
    }

    pub fn clear(&self) {
        self.rect.set(None);
    }
}

impl RectSource for LayoutProbe {
    fn rectangle(&self) -> Option<ViewportRect> {
        self.rect.get()
    }
}
