//! Host-side workflow state: the photo, the design, and the latest result.

use std::fmt;

use crate::design::NailDesign;
use crate::io::ImageRef;
use crate::presets::Preset;

/// Shown when a generation fails without a message of its own.
pub const GENERIC_FAILURE: &str = "Failed to generate nail art. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkflowStep {
    Upload,
    Design,
    Result,
}

impl WorkflowStep {
    pub const ALL: &[Self] = &[Self::Upload, Self::Design, Self::Result];

    /// 1-based position shown in the step indicator.
    pub fn number(&self) -> usize {
        match self {
            Self::Upload => 1,
            Self::Design => 2,
            Self::Result => 3,
        }
    }
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upload => write!(f, "Upload"),
            Self::Design => write!(f, "Design"),
            Self::Result => write!(f, "Result"),
        }
    }
}

/// Everything a generation job needs, captured when it starts.
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    pub ticket: u64,
    pub source: ImageRef,
    pub design: NailDesign,
}

#[derive(Clone, Debug, Default)]
pub struct StudioSession {
    original: Option<ImageRef>,
    generated: Option<ImageRef>,
    pub design: NailDesign,
    generating: bool,
    error: Option<String>,
    /// Bumped whenever the photo changes so late results for an old photo are dropped.
    ticket: u64,
}

impl StudioSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn original(&self) -> Option<&ImageRef> {
        self.original.as_ref()
    }

    pub fn generated(&self) -> Option<&ImageRef> {
        self.generated.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Replace the photo. Any previous result belongs to the old photo and is dropped.
    pub fn set_original(&mut self, image: ImageRef) {
        self.original = Some(image);
        self.reset_result();
    }

    /// Forget both images. The design is kept.
    pub fn clear(&mut self) {
        self.original = None;
        self.reset_result();
    }

    fn reset_result(&mut self) {
        self.generated = None;
        self.error = None;
        self.generating = false;
        self.ticket += 1;
    }

    pub fn apply_preset(&mut self, preset: &Preset) {
        self.design.apply(&preset.patch);
    }

    pub fn can_generate(&self) -> bool {
        self.original.is_some() && !self.generating
    }

    /// Mark a generation as started. `None` when there is no photo or one is
    /// already running.
    pub fn begin_generation(&mut self) -> Option<GenerationRequest> {
        if !self.can_generate() {
            return None;
        }
        let source = self.original.clone()?;
        self.generating = true;
        self.error = None;
        Some(GenerationRequest {
            ticket: self.ticket,
            source,
            design: self.design.clone(),
        })
    }

    /// Record the outcome of the job started with `ticket`. Returns false (and
    /// changes nothing) when the photo has changed since.
    pub fn finish_generation(
        &mut self,
        ticket: u64,
        outcome: std::result::Result<ImageRef, String>,
    ) -> bool {
        if ticket != self.ticket || !self.generating {
            return false;
        }
        self.generating = false;
        match outcome {
            Ok(image) => self.generated = Some(image),
            Err(message) if message.trim().is_empty() => {
                self.error = Some(GENERIC_FAILURE.to_string())
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    pub fn step(&self) -> WorkflowStep {
        match (&self.original, &self.generated) {
            (_, Some(_)) => WorkflowStep::Result,
            (Some(_), None) => WorkflowStep::Design,
            (None, None) => WorkflowStep::Upload,
        }
    }
}
