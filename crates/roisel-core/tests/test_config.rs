use std::path::{Path, PathBuf};

use roisel_core::config::{CaptureConfig, DEFAULT_ROI_COUNT};
use roisel_core::io::roi_table::RoiFormat;
use roisel_core::roi::RadiusMode;

#[test]
fn test_defaults() {
    let config = CaptureConfig::default();
    assert_eq!(config.data_root, PathBuf::from("../data"));
    assert_eq!(config.roi_count, DEFAULT_ROI_COUNT);
    assert_eq!(config.roi_count, 3);
    assert_eq!(config.radius_mode, RadiusMode::Signed);
    assert_eq!(config.output_format, RoiFormat::Scientific);
}

#[test]
fn test_dataset_path_layout() {
    let config = CaptureConfig::default();
    assert_eq!(
        config.dataset_path(12),
        Path::new("../data").join("12").join("pdata").join("1").join("2dseq")
    );
}

#[test]
fn test_partial_toml_fills_defaults() {
    let config: CaptureConfig = toml::from_str("roi_count = 5\nradius_mode = \"absolute\"\n").unwrap();
    assert_eq!(config.roi_count, 5);
    assert_eq!(config.radius_mode, RadiusMode::Absolute);
    assert_eq!(config.output_format, RoiFormat::Scientific);
    assert_eq!(config.data_root, PathBuf::from("../data"));
}

#[test]
fn test_empty_toml_is_default() {
    let config: CaptureConfig = toml::from_str("").unwrap();
    assert_eq!(config, CaptureConfig::default());
}

#[test]
fn test_toml_roundtrip() {
    let config = CaptureConfig {
        data_root: PathBuf::from("/srv/mri"),
        roi_count: 4,
        radius_mode: RadiusMode::Absolute,
        output_format: RoiFormat::Integer,
    };
    let text = toml::to_string_pretty(&config).unwrap();
    assert!(text.contains("output_format = \"integer\""));
    let back: CaptureConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_unknown_radius_mode_rejected() {
    assert!(toml::from_str::<CaptureConfig>("radius_mode = \"clamped\"\n").is_err());
}

#[test]
fn test_display_names() {
    assert_eq!(format!("{}", RadiusMode::Signed), "Signed");
    assert_eq!(format!("{}", RoiFormat::Integer), "Integer");
}
