pub mod config;
pub mod export;
pub mod info;
pub mod inspect;

use std::path::Path;

use roisel_core::config::CaptureConfig;

/// Capture defaults, with `--data-root` replacing the data root when given.
pub fn capture_config(data_root: Option<&Path>) -> CaptureConfig {
    let mut config = CaptureConfig::default();
    if let Some(root) = data_root {
        config.data_root = root.to_path_buf();
    }
    config
}
