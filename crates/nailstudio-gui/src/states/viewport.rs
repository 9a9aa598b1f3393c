use nailstudio_core::slider::ComparisonSlider;

/// Textures on screen, plus the mounted comparison view once a result exists.
#[derive(Default)]
pub struct ViewportState {
    pub original: Option<egui::TextureHandle>,
    pub comparison: Option<ComparisonSlider<egui::TextureHandle>>,
    /// Where the comparison view was drawn this frame; presses inside it start a drag.
    pub comparison_rect: Option<egui::Rect>,
}

impl ViewportState {
    /// New photo: any comparison belongs to the old one.
    pub fn set_original(&mut self, texture: egui::TextureHandle) {
        self.original = Some(texture);
        self.unmount_comparison();
    }

    /// Mount a fresh comparison (split back at its default) for a new result.
    pub fn set_result(&mut self, texture: egui::TextureHandle) {
        if let Some(ref original) = self.original {
            self.comparison = Some(ComparisonSlider::new(original.clone(), texture));
            self.comparison_rect = None;
        }
    }

    pub fn clear(&mut self) {
        self.original = None;
        self.unmount_comparison();
    }

    pub fn unmount_comparison(&mut self) {
        self.comparison = None;
        self.comparison_rect = None;
    }

    pub fn image_size(&self) -> Option<[usize; 2]> {
        self.original.as_ref().map(|t| t.size())
    }
}
