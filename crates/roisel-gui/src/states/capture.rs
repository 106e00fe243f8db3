use roisel_core::roi::ClickPoint;

/// Pointer bookkeeping between frames.
#[derive(Default)]
pub struct CaptureUiState {
    /// Buttons whose press reached the session and whose release has not.
    pub buttons_down: usize,
    /// Last pointer position in data coordinates, for the status bar.
    pub hover: Option<ClickPoint>,
}

impl CaptureUiState {
    pub fn button_held(&self) -> bool {
        self.buttons_down > 0
    }
}
