use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use roisel_core::io::roi_table::read_roi_table;

use crate::summary::print_roi_table;

#[derive(Args)]
pub struct InspectArgs {
    /// ROI table written by roi-select
    pub file: PathBuf,
}

pub fn run(args: &InspectArgs) -> Result<()> {
    let rois = read_roi_table(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    print_roi_table(&args.file, &rois);
    Ok(())
}
