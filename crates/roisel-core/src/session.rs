use tracing::debug;

use crate::roi::{CaptureSamples, ClickPoint, PendingCircle};

/// Keys the capture session reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionKey {
    Enter,
    Other,
}

/// What the window should do after a key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Close,
}

/// State of one interactive capture.
///
/// Every press records a center sample, every release records the sample the
/// radius is derived from. Nothing is validated here; pairing and counting
/// happen in [`crate::roi::post_process`].
#[derive(Debug, Default)]
pub struct CaptureSession {
    samples: CaptureSamples,
    preview: Option<PendingCircle>,
    finished: bool,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_press(&mut self, point: ClickPoint) {
        debug!(x = point.x, y = point.y, "press");
        self.samples.xs.push(point.x);
        self.samples.ys.push(point.y);
    }

    /// Update the live preview. Returns the circle to draw, if any.
    pub fn on_motion(&mut self, point: ClickPoint, button_held: bool) -> Option<PendingCircle> {
        self.preview = match (button_held, self.samples.xs.last(), self.samples.ys.last()) {
            (true, Some(&cx), Some(&cy)) => Some(PendingCircle {
                center: ClickPoint::new(cx, cy),
                radius: (point.x - cx).abs(),
            }),
            _ => None,
        };
        self.preview
    }

    pub fn on_release(&mut self, point: ClickPoint) {
        debug!(x = point.x, "release");
        self.samples.xs.push(point.x);
        self.preview = None;
    }

    pub fn on_key(&mut self, key: SessionKey) -> SessionControl {
        match key {
            SessionKey::Enter => {
                debug!(pairs = self.samples.completed_pairs(), "capture finished");
                self.finished = true;
                SessionControl::Close
            }
            SessionKey::Other => SessionControl::Continue,
        }
    }

    pub fn preview(&self) -> Option<PendingCircle> {
        self.preview
    }

    pub fn samples(&self) -> &CaptureSamples {
        &self.samples
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn into_samples(self) -> CaptureSamples {
        self.samples
    }
}
