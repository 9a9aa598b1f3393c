mod ui;
mod viewport;

pub use ui::{BusyTask, UIState};
pub use viewport::ViewportState;
