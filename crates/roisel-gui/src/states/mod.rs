mod capture;
mod viewport;

pub use capture::CaptureUiState;
pub use viewport::ViewportState;
