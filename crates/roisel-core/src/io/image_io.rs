use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};

use crate::error::Result;
use crate::frame::Frame;

/// Save a frame as 16-bit grayscale TIFF.
pub fn save_tiff(frame: &Frame, path: &Path) -> Result<()> {
    let h = frame.height();
    let w = frame.width();

    let pixels: Vec<u16> = frame
        .data
        .iter()
        .map(|v| (v.clamp(0.0, 1.0) * 65535.0) as u16)
        .collect();

    let img = image::ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(w as u32, h as u32, pixels)
        .expect("buffer size matches dimensions");
    img.save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save a frame as 8-bit grayscale PNG.
pub fn save_png(frame: &Frame, path: &Path) -> Result<()> {
    let h = frame.height();
    let w = frame.width();

    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let val = (frame.data[[row, col]].clamp(0.0, 1.0) * 255.0) as u8;
            img.put_pixel(col as u32, row as u32, Luma([val]));
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save frame, choosing format from file extension.
pub fn save_image(frame: &Frame, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => save_tiff(frame, path),
        _ => save_png(frame, path),
    }
}
