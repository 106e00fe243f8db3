use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::io::bruker::DATA_FILE;
use crate::io::roi_table::RoiFormat;
use crate::roi::RadiusMode;

/// Default number of circles a capture is expected to produce.
pub const DEFAULT_ROI_COUNT: usize = 3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Root of the dataset tree; series live under `<data_root>/<serie>`.
    pub data_root: PathBuf,
    /// Number of ROIs written to the output table.
    pub roi_count: usize,
    pub radius_mode: RadiusMode,
    pub output_format: RoiFormat,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("../data"),
            roi_count: DEFAULT_ROI_COUNT,
            radius_mode: RadiusMode::default(),
            output_format: RoiFormat::default(),
        }
    }
}

impl CaptureConfig {
    /// Path of the processed image for a series: `<data_root>/<serie>/pdata/1/2dseq`.
    pub fn dataset_path(&self, serie: u32) -> PathBuf {
        self.data_root
            .join(serie.to_string())
            .join("pdata")
            .join("1")
            .join(DATA_FILE)
    }
}
