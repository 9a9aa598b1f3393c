use approx::assert_relative_eq;

use nailstudio_core::slider::{
    ComparisonSlider, DragState, PointerSurface, SurfaceEvent, ViewportRect,
};

fn mounted(surface_rect: ViewportRect) -> ComparisonSlider<&'static str> {
    let slider = ComparisonSlider::new("before", "after");
    slider.record_viewport(surface_rect);
    slider
}

#[test]
fn test_inputs_are_kept() {
    let slider = ComparisonSlider::new("a.png", "b.png");
    assert_eq!(*slider.before(), "a.png");
    assert_eq!(*slider.after(), "b.png");
    assert_relative_eq!(slider.split().percent(), 50.0);
    assert_eq!(slider.drag_state(), DragState::Idle);
}

#[test]
fn test_press_registers_one_listener() {
    let surface = PointerSurface::new();
    let mut slider = mounted(ViewportRect::new(100.0, 200.0));

    slider.press(250.0, &surface);
    assert_eq!(surface.listener_count(), 1);
    assert!(slider.is_listening());
    assert_relative_eq!(slider.split().percent(), 75.0);

    // A second press while still registered must not stack listeners.
    slider.press(200.0, &surface);
    assert_eq!(surface.listener_count(), 1);
}

#[test]
fn test_global_moves_track_outside_component() {
    let surface = PointerSurface::new();
    let mut slider = mounted(ViewportRect::new(100.0, 200.0));

    slider.press(250.0, &surface);
    surface.dispatch(SurfaceEvent::Move { x: 50.0, y: 900.0 });
    assert_relative_eq!(slider.split().percent(), 0.0);
    surface.dispatch(SurfaceEvent::Move { x: 400.0, y: -20.0 });
    assert_relative_eq!(slider.split().percent(), 100.0);
}

#[test]
fn test_release_anywhere_ends_drag_and_unregisters() {
    let surface = PointerSurface::new();
    let mut slider = mounted(ViewportRect::new(100.0, 200.0));

    slider.press(250.0, &surface);
    surface.dispatch(SurfaceEvent::Move { x: 400.0, y: 0.0 });
    surface.dispatch(SurfaceEvent::Release);

    assert_eq!(slider.drag_state(), DragState::Idle);
    assert_eq!(surface.listener_count(), 0);
    assert!(!slider.is_listening());

    surface.dispatch(SurfaceEvent::Move { x: 250.0, y: 0.0 });
    assert_relative_eq!(slider.split().percent(), 100.0);
}

#[test]
fn test_cancel_ends_drag() {
    let surface = PointerSurface::new();
    let mut slider = mounted(ViewportRect::new(0.0, 100.0));
    slider.press(10.0, &surface);
    surface.dispatch(SurfaceEvent::Cancel);
    assert_eq!(slider.drag_state(), DragState::Idle);
    assert_eq!(surface.listener_count(), 0);
}

#[test]
fn test_press_after_release_resubscribes() {
    let surface = PointerSurface::new();
    let mut slider = mounted(ViewportRect::new(0.0, 100.0));

    for round in 0..5 {
        slider.press(20.0 + round as f32, &surface);
        assert_eq!(surface.listener_count(), 1);
        surface.dispatch(SurfaceEvent::Release);
        assert_eq!(surface.listener_count(), 0);
    }
    assert_relative_eq!(slider.split().percent(), 24.0);
}

#[test]
fn test_drop_unregisters_mid_drag() {
    let surface = PointerSurface::new();
    let mut slider = mounted(ViewportRect::new(0.0, 100.0));
    slider.press(30.0, &surface);
    assert_eq!(surface.listener_count(), 1);

    drop(slider);
    assert_eq!(surface.listener_count(), 0);
    assert_eq!(surface.dispatch(SurfaceEvent::Move { x: 1.0, y: 1.0 }), 0);
}

#[test]
fn test_two_sliders_are_independent() {
    let surface = PointerSurface::new();
    let mut left = mounted(ViewportRect::new(0.0, 100.0));
    let right = mounted(ViewportRect::new(200.0, 100.0));

    left.press(10.0, &surface);
    surface.dispatch(SurfaceEvent::Move { x: 60.0, y: 0.0 });

    assert_relative_eq!(left.split().percent(), 60.0);
    assert_relative_eq!(right.split().percent(), 50.0);
    assert_eq!(right.drag_state(), DragState::Idle);
}

#[test]
fn test_unlaid_out_slider_keeps_split() {
    let surface = PointerSurface::new();
    let mut slider = ComparisonSlider::new((), ());
    slider.press(500.0, &surface);
    assert_eq!(slider.drag_state(), DragState::Dragging);
    assert_relative_eq!(slider.split().percent(), 50.0);
}
