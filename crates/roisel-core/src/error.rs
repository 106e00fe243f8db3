use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoiselError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing dataset parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid value for parameter {name}: {value}")]
    InvalidParameter { name: String, value: String },

    #[error("Unsupported word type: {0}")]
    UnsupportedWordType(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error(
        "Not enough clicks: need {expected_x} x-samples and {expected_y} y-samples, \
         got {got_x} and {got_y}"
    )]
    InsufficientClicks {
        expected_x: usize,
        got_x: usize,
        expected_y: usize,
        got_y: usize,
    },

    #[error("Invalid ROI table at line {line}: {reason}")]
    InvalidRoiTable { line: usize, reason: String },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RoiselError>;
