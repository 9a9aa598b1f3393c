use approx::assert_relative_eq;

use nailstudio_core::slider::{DragState, DragTracker, SplitPosition, ViewportRect};

const RECT: ViewportRect = ViewportRect {
    left: 100.0,
    width: 200.0,
};

#[test]
fn test_initial_state_is_idle_at_half() {
    let tracker = DragTracker::new();
    assert_eq!(tracker.state(), DragState::Idle);
    assert_relative_eq!(tracker.split().percent(), 50.0);
}

#[test]
fn test_begin_jumps_to_press_point() {
    let mut tracker = DragTracker::new();
    tracker.begin(250.0, &RECT);
    assert!(tracker.is_dragging());
    assert_relative_eq!(tracker.split().percent(), 75.0);
}

#[test]
fn test_edges_and_center() {
    let mut tracker = DragTracker::new();
    tracker.begin(100.0, &RECT);
    assert_relative_eq!(tracker.split().percent(), 0.0);
    tracker.begin(300.0, &RECT);
    assert_relative_eq!(tracker.split().percent(), 100.0);
    tracker.begin(200.0, &RECT);
    assert_relative_eq!(tracker.split().percent(), 50.0);
}

#[test]
fn test_outside_coordinates_clamp() {
    let mut tracker = DragTracker::new();
    tracker.begin(-1e6, &RECT);
    assert_relative_eq!(tracker.split().percent(), 0.0);
    tracker.begin(1e6, &RECT);
    assert_relative_eq!(tracker.split().percent(), 100.0);
    tracker.begin(f32::INFINITY, &RECT);
    assert_relative_eq!(tracker.split().percent(), 100.0);
    tracker.begin(f32::NEG_INFINITY, &RECT);
    assert_relative_eq!(tracker.split().percent(), 0.0);
}

#[test]
fn test_split_always_in_range() {
    let mut tracker = DragTracker::new();
    let mut x = -500.0_f32;
    while x <= 900.0 {
        tracker.begin(x, &RECT);
        let p = tracker.split().percent();
        assert!((0.0..=100.0).contains(&p), "x={x} gave {p}");
        x += 7.3;
    }
}

#[test]
fn test_stationary_move_is_idempotent() {
    let mut tracker = DragTracker::new();
    tracker.begin(173.0, &RECT);
    let before = tracker.split();
    assert!(!tracker.move_to(173.0, &RECT));
    assert_eq!(tracker.split(), before);
}

#[test]
fn test_move_while_idle_is_ignored() {
    let mut tracker = DragTracker::new();
    assert!(!tracker.move_to(120.0, &RECT));
    assert_relative_eq!(tracker.split().percent(), 50.0);
}

#[test]
fn test_end_is_idempotent_and_freezes_split() {
    let mut tracker = DragTracker::new();
    tracker.begin(150.0, &RECT);
    assert!(tracker.end());
    assert!(!tracker.end());
    assert_eq!(tracker.state(), DragState::Idle);

    for x in [0.0, 120.0, 260.0, 999.0] {
        tracker.move_to(x, &RECT);
    }
    assert_relative_eq!(tracker.split().percent(), 25.0);

    tracker.begin(280.0, &RECT);
    assert_relative_eq!(tracker.split().percent(), 90.0);
}

#[test]
fn test_drag_scenario() {
    let mut tracker = DragTracker::new();
    tracker.begin(250.0, &RECT);
    assert_relative_eq!(tracker.split().percent(), 75.0);
    tracker.move_to(50.0, &RECT);
    assert_relative_eq!(tracker.split().percent(), 0.0);
    tracker.move_to(400.0, &RECT);
    assert_relative_eq!(tracker.split().percent(), 100.0);
    tracker.end();
    tracker.move_to(250.0, &RECT);
    assert_relative_eq!(tracker.split().percent(), 100.0);
}

#[test]
fn test_zero_width_rect_leaves_split_unchanged() {
    let degenerate = ViewportRect::new(100.0, 0.0);
    let mut tracker = DragTracker::new();
    tracker.begin(250.0, &degenerate);
    assert_relative_eq!(tracker.split().percent(), 50.0);
    assert!(!tracker.move_to(90.0, &degenerate));
    assert_relative_eq!(tracker.split().percent(), 50.0);
}

#[test]
fn test_missing_rect_leaves_split_unchanged() {
    let mut tracker = DragTracker::new();
    tracker.begin(250.0, &None::<ViewportRect>);
    assert!(tracker.is_dragging());
    assert_relative_eq!(tracker.split().percent(), 50.0);
}

#[test]
fn test_rect_is_read_at_event_time() {
    let mut tracker = DragTracker::new();
    tracker.begin(200.0, &RECT);
    let moved = ViewportRect::new(0.0, 400.0);
    tracker.move_to(200.0, &moved);
    assert_relative_eq!(tracker.split().percent(), 50.0);
    tracker.move_to(100.0, &moved);
    assert_relative_eq!(tracker.split().percent(), 25.0);
}

#[test]
fn test_split_position_clamps() {
    assert_relative_eq!(SplitPosition::new(-3.0).percent(), 0.0);
    assert_relative_eq!(SplitPosition::new(130.0).percent(), 100.0);
    assert_relative_eq!(SplitPosition::new(f32::NAN).percent(), 50.0);
    assert_relative_eq!(SplitPosition::new(40.0).fraction(), 0.4);
}
