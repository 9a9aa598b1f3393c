//! Before/after comparison slider: drag tracking, pointer surface and layout.

pub mod geometry;
pub mod layout;
pub mod surface;
pub mod tracker;

use std::cell::RefCell;
use std::rc::Rc;

pub use geometry::{fit_contain, LayoutProbe, Rect, RectSource, ViewportRect};
pub use layout::{ComparisonLayout, LabelAnchor};
pub use surface::{ListenerControl, PointerListener, PointerSurface, Subscription, SurfaceEvent};
pub use tracker::{DragState, DragTracker, SplitPosition};

/// Tracker plus the live bounds it reads; this is what the surface notifies.
struct SliderCore {
    tracker: DragTracker,
    bounds: LayoutProbe,
}

impl PointerListener for SliderCore {
    fn on_event(&mut self, event: &SurfaceEvent) -> ListenerControl {
        match *event {
            SurfaceEvent::Move { x, .. } => {
                self.tracker.move_to(x, &self.bounds);
                ListenerControl::Keep
            }
            SurfaceEvent::Release | SurfaceEvent::Cancel => {
                self.tracker.end();
                ListenerControl::Detach
            }
            SurfaceEvent::Press { .. } => ListenerControl::Keep,
        }
    }
}

/// One mounted comparison view.
///
/// `before` and `after` are fixed for the lifetime of the value; to show new
/// images, build a new slider. Dropping it releases any drag registration.
pub struct ComparisonSlider<I> {
    before: I,
    after: I,
    core: Rc<RefCell<SliderCore>>,
    subscription: Option<Subscription>,
}

impl<I> ComparisonSlider<I> {
    pub fn new(before: I, after: I) -> Self {
        Self {
            before,
            after,
            core: Rc::new(RefCell::new(SliderCore {
                tracker: DragTracker::new(),
                bounds: LayoutProbe::new(),
            })),
            subscription: None,
        }
    }

    pub fn before(&self) -> &I {
        &self.before
    }

    pub fn after(&self) -> &I {
        &self.after
    }

    pub fn split(&self) -> SplitPosition {
        self.core.borrow().tracker.split()
    }

    pub fn drag_state(&self) -> DragState {
        self.core.borrow().tracker.state()
    }

    /// Record where the view was laid out this pass.
    pub fn record_viewport(&self, rect: ViewportRect) {
        self.core.borrow().bounds.record(rect);
    }

    /// Pointer went down on the component: start dragging, jump the split to
    /// `x`, and listen on `surface` for moves and the release.
    pub fn press(&mut self, x: f32, surface: &PointerSurface) {
        {
            let mut core = self.core.borrow_mut();
            let SliderCore { tracker, bounds } = &mut *core;
            tracker.begin(x, &*bounds);
        }

        if !self.is_listening() {
            let listener: Rc<RefCell<dyn PointerListener>> = self.core.clone();
            self.subscription = Some(surface.subscribe(listener));
        }
    }

    /// Whether this slider currently holds a live surface registration.
    pub fn is_listening(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// Compute this frame's geometry for the given image sizes.
    pub fn layout(&self, viewport: Rect, before_size: [f32; 2], after_size: [f32; 2]) -> ComparisonLayout {
        ComparisonLayout::compute(viewport, before_size, after_size, self.split())
    }
}
