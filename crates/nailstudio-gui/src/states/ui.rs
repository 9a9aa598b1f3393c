use std::fmt;
use std::time::Duration;

/// Worker job the UI is waiting on, other than generation (tracked by the session).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusyTask {
    LoadingPhoto,
    Saving,
}

impl fmt::Display for BusyTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadingPhoto => write!(f, "Loading photo"),
            Self::Saving => write!(f, "Exporting"),
        }
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub busy: Option<BusyTask>,
    /// File name (or "Sample photo") of the current original.
    pub source_label: Option<String>,
    pub last_generation: Option<Duration>,
    /// Last load/export failure, shown over the canvas until dismissed.
    pub error: Option<String>,
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.busy.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
