mod app;
mod convert;
mod panels;
mod states;

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use roisel_core::config::CaptureConfig;
use roisel_core::io::bruker::load_normalized_frame;
use roisel_core::io::roi_table::write_roi_table;
use roisel_core::roi::post_process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roi-select", about = "Mark circular regions of interest on an MRI slice")]
#[command(version)]
struct Cli {
    /// Series identifier; the dataset is read from <data-root>/<SERIE>/pdata/1/2dseq
    serie: u32,

    /// Output file for the ROI table (one "x y radius" row per circle)
    filename: PathBuf,

    /// TOML capture configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the dataset root directory
    #[arg(long)]
    data_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(root) = cli.data_root {
        config.data_root = root;
    }

    let dataset = config.dataset_path(cli.serie);
    let frame = load_normalized_frame(&dataset)
        .with_context(|| format!("Failed to load dataset {}", dataset.display()))?;

    let (done_tx, done_rx) = mpsc::channel();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([700.0, 400.0])
            .with_min_inner_size([320.0, 240.0])
            .with_title(format!("ROI selection: series {}", cli.serie)),
        ..Default::default()
    };

    let roi_count = config.roi_count;
    eframe::run_native(
        "roi-select",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::RoiSelectApp::new(
                &cc.egui_ctx,
                &frame,
                roi_count,
                done_tx,
            )))
        }),
    )
    .map_err(|e| anyhow!("Window error: {e}"))?;

    // The window may be torn down without handing anything back.
    let samples = done_rx.try_recv().unwrap_or_default();
    info!(
        x_samples = samples.xs.len(),
        y_samples = samples.ys.len(),
        "Capture closed"
    );

    let rois = post_process(&samples, config.roi_count, config.radius_mode)?;
    for roi in &rois {
        info!(%roi, "ROI");
    }
    write_roi_table(&cli.filename, &rois, config.output_format)
        .with_context(|| format!("Failed to write {}", cli.filename.display()))?;

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<CaptureConfig> {
    let Some(path) = path else {
        return Ok(CaptureConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}
