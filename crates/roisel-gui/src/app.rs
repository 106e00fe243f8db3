use std::sync::mpsc;

use roisel_core::frame::Frame;
use roisel_core::roi::CaptureSamples;
use roisel_core::session::CaptureSession;
use tracing::info;

use crate::convert::frame_to_color_image;
use crate::panels;
use crate::states::{CaptureUiState, ViewportState};

pub struct RoiSelectApp {
    pub session: CaptureSession,
    pub capture_ui: CaptureUiState,
    pub viewport: ViewportState,
    /// Number of circles the post-processor expects.
    pub roi_count: usize,
    done_tx: Option<mpsc::Sender<CaptureSamples>>,
}

impl RoiSelectApp {
    pub fn new(
        ctx: &egui::Context,
        frame: &Frame,
        roi_count: usize,
        done_tx: mpsc::Sender<CaptureSamples>,
    ) -> Self {
        let image = frame_to_color_image(frame);
        let size = image.size;
        let texture = ctx.load_texture("frame", image, egui::TextureOptions::NEAREST);

        Self {
            session: CaptureSession::new(),
            capture_ui: CaptureUiState::default(),
            viewport: ViewportState {
                texture: Some(texture),
                image_size: Some(size),
                ..Default::default()
            },
            roi_count,
            done_tx: Some(done_tx),
        }
    }

    /// Hand the captured samples back to `main`. Only the first call sends.
    pub fn finish(&mut self) {
        if let Some(tx) = self.done_tx.take() {
            info!(
                pairs = self.session.samples().completed_pairs(),
                "Handing capture to post-processing"
            );
            let _ = tx.send(self.session.samples().clone());
        }
    }
}

impl eframe::App for RoiSelectApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        if ctx.input(|i| i.viewport().close_requested()) {
            self.finish();
        }
    }
}
