use crate::consts::{DEFAULT_SPLIT_PERCENT, MAX_SPLIT_PERCENT};

use super::geometry::RectSource;

/// Percentage of the viewport width revealing the "before" layer. Always in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct SplitPosition(f32);

impl SplitPosition {
    /// Build a split position, clamping into `[0, 100]`. NaN maps to the default.
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(0.0, MAX_SPLIT_PERCENT))
    }

    pub fn percent(self) -> f32 {
        self.0
    }

    /// Split as a fraction of the width, `[0, 1]`.
    pub fn fraction(self) -> f32 {
        self.0 / MAX_SPLIT_PERCENT
    }
}

impl Default for SplitPosition {
    fn default() -> Self {
        Self(DEFAULT_SPLIT_PERCENT)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Two-state drag machine converting pointer x coordinates into a split position.
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    split: SplitPosition,
    state: DragState,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn split(&self) -> SplitPosition {
        self.split
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Start dragging and jump the split to `x`, so a click without movement
    /// still moves the handle.
    pub fn begin<R: RectSource + ?Sized>(&mut self, x: f32, bounds: &R) {
        self.state = DragState::Dragging;
        self.apply(x, bounds);
    }

    /// Track the pointer while dragging. Returns whether the split changed.
    pub fn move_to<R: RectSource + ?Sized>(&mut self, x: f32, bounds: &R) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.apply(x, bounds)
    }

    /// Stop dragging. Returns whether a drag was in progress.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }

    fn apply<R: RectSource + ?Sized>(&mut self, x: f32, bounds: &R) -> bool {
        let Some(percent) = bounds.rectangle().and_then(|r| r.percentage_at(x)) else {
            return false;
        };
        let next = SplitPosition::new(percent);
        let changed = next != self.split;
        self.split = next;
        changed
    }
}
