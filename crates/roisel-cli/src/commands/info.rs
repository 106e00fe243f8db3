use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use roisel_core::io::bruker::BrukerDataset;

use super::capture_config;
use crate::summary::print_dataset_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Series identifier
    pub serie: u32,

    /// Dataset root directory [default: from the capture config]
    #[arg(long)]
    pub data_root: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let path = capture_config(args.data_root.as_deref()).dataset_path(args.serie);
    let dataset = BrukerDataset::open(&path)
        .with_context(|| format!("Failed to open dataset {}", path.display()))?;

    print_dataset_summary(&dataset.info);
    Ok(())
}
