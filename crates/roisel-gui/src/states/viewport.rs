/// Viewport display state.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Image size in pixels, `[width, height]`.
    pub image_size: Option<[usize; 2]>,
    pub zoom: f32,
    pub pan_offset: egui::Vec2,
    /// Set once the image has been fit to the panel.
    pub fitted: bool,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            image_size: None,
            zoom: 1.0,
            pan_offset: egui::Vec2::ZERO,
            fitted: false,
        }
    }
}
