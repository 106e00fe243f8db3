use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, RoiselError};
use crate::roi::Roi;

/// Text layout of the numbers in an ROI table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoiFormat {
    /// `%.18e` per field, e.g. `1.000000000000000000e+01`.
    #[default]
    Scientific,
    /// Plain integers.
    Integer,
}

impl fmt::Display for RoiFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scientific => write!(f, "Scientific"),
            Self::Integer => write!(f, "Integer"),
        }
    }
}

/// Write one ROI per line as `center_x center_y radius`.
pub fn write_roi_table(path: &Path, rois: &[Roi], format: RoiFormat) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for roi in rois {
        writeln!(writer, "{}", format_row(roi, format))?;
    }
    writer.flush()?;
    info!(path = %path.display(), count = rois.len(), "ROI table written");
    Ok(())
}

pub fn format_row(roi: &Roi, format: RoiFormat) -> String {
    let fields = [roi.center_x, roi.center_y, roi.radius];
    let cells: Vec<String> = match format {
        RoiFormat::Scientific => fields
            .iter()
            .map(|&v| format_scientific(v as f64))
            .collect(),
        RoiFormat::Integer => fields.iter().map(|v| v.to_string()).collect(),
    };
    cells.join(" ")
}

/// Format like C's `%.18e`: signed exponent with at least two digits.
pub fn format_scientific(value: f64) -> String {
    let s = format!("{value:.18e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.abs())
        }
        None => s,
    }
}

/// Read an ROI table written in either format. Blank lines and `#` comments are skipped.
pub fn read_roi_table(path: &Path) -> Result<Vec<Roi>> {
    let text = std::fs::read_to_string(path)?;
    parse_roi_table(&text)
}

pub fn parse_roi_table(text: &str) -> Result<Vec<Roi>> {
    let mut rois = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let values = line
            .split_whitespace()
            .map(|field| {
                field.parse::<f64>().map_err(|_| RoiselError::InvalidRoiTable {
                    line: idx + 1,
                    reason: format!("not a number: {field}"),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        let &[x, y, r] = values.as_slice() else {
            return Err(RoiselError::InvalidRoiTable {
                line: idx + 1,
                reason: format!("expected 3 fields, found {}", values.len()),
            });
        };
        rois.push(Roi {
            center_x: x as i64,
            center_y: y as i64,
            radius: r as i64,
        });
    }
    Ok(rois)
}
