use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use roisel_core::io::bruker::load_normalized_frame;
use roisel_core::io::image_io::save_image;
use tracing::info;

use super::capture_config;

#[derive(Args)]
pub struct ExportArgs {
    /// Series identifier
    pub serie: u32,

    /// Output image (.png, or .tif/.tiff for 16-bit)
    pub output: PathBuf,

    /// Dataset root directory [default: from the capture config]
    #[arg(long)]
    pub data_root: Option<PathBuf>,
}

pub fn run(args: &ExportArgs) -> Result<()> {
    let path = capture_config(args.data_root.as_deref()).dataset_path(args.serie);
    let frame = load_normalized_frame(&path)
        .with_context(|| format!("Failed to load dataset {}", path.display()))?;

    save_image(&frame, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    info!(output = %args.output.display(), "Frame exported");
    println!(
        "Saved {}x{} frame to {}",
        frame.width(),
        frame.height(),
        args.output.display()
    );
    Ok(())
}
