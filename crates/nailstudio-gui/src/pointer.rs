use nailstudio_core::slider::SurfaceEvent;

/// Translate this frame's raw egui input into pointer-surface events, in order.
///
/// Touches arrive as both `Event::Touch` and synthesized pointer events, so
/// only a touch cancel is taken from the touch stream.
pub fn surface_events(events: &[egui::Event]) -> Vec<SurfaceEvent> {
    events.iter().filter_map(surface_event).collect()
}

fn surface_event(event: &egui::Event) -> Option<SurfaceEvent> {
    match *event {
        egui::Event::PointerMoved(pos) => Some(SurfaceEvent::Move { x: pos.x, y: pos.y }),
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            ..
        } => Some(if pressed {
            SurfaceEvent::Press { x: pos.x, y: pos.y }
        } else {
            SurfaceEvent::Release
        }),
        egui::Event::PointerGone => Some(SurfaceEvent::Cancel),
        egui::Event::Touch {
            phase: egui::TouchPhase::Cancel,
            ..
        } => Some(SurfaceEvent::Cancel),
        egui::Event::WindowFocused(false) => Some(SurfaceEvent::Cancel),
        _ => None,
    }
}
