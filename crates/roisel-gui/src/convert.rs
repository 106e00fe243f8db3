use roisel_core::frame::Frame;

/// Convert a grayscale Frame (Array2<f32> in [0.0, 1.0]) to an egui ColorImage.
pub fn frame_to_color_image(frame: &Frame) -> egui::ColorImage {
    let pixels = frame
        .data
        .iter()
        .map(|v| egui::Color32::from_gray((v.clamp(0.0, 1.0) * 255.0) as u8))
        .collect();

    egui::ColorImage {
        size: [frame.width(), frame.height()],
        pixels,
        source_size: Default::default(),
    }
}
