use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoiselError};

/// A pointer position in image data units (integer values are pixel centers).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClickPoint {
    pub x: f64,
    pub y: f64,
}

impl ClickPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Live circle shown while a button is held; never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingCircle {
    pub center: ClickPoint,
    pub radius: f64,
}

/// One finalized circular region of interest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roi {
    pub center_x: i64,
    pub center_y: i64,
    pub radius: i64,
}

impl fmt::Display for Roi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "center=({}, {}) r={}",
            self.center_x, self.center_y, self.radius
        )
    }
}

/// How the release sample is turned into a radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusMode {
    /// `release.x - press.x`; a leftward drag gives a negative radius.
    #[default]
    Signed,
    /// `|release.x - press.x|`, matching the live preview.
    Absolute,
}

impl fmt::Display for RadiusMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed => write!(f, "Signed"),
            Self::Absolute => write!(f, "Absolute"),
        }
    }
}

/// Raw samples accumulated by a capture session.
///
/// `xs` interleaves press and release x values (`press0, release0, press1, ...`);
/// `ys` holds one entry per press.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaptureSamples {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl CaptureSamples {
    /// Number of complete press/release pairs.
    pub fn completed_pairs(&self) -> usize {
        (self.xs.len() / 2).min(self.ys.len())
    }
}

/// Turn captured samples into exactly `count` ROIs.
///
/// The i-th ROI is centered on the i-th press, with the radius taken from the
/// horizontal distance to the following release. Values are truncated toward
/// zero. Samples beyond the first `count` pairs are ignored.
pub fn post_process(samples: &CaptureSamples, count: usize, mode: RadiusMode) -> Result<Vec<Roi>> {
    let expected_x = 2 * count;
    if samples.xs.len() < expected_x || samples.ys.len() < count {
        return Err(RoiselError::InsufficientClicks {
            expected_x,
            got_x: samples.xs.len(),
            expected_y: count,
            got_y: samples.ys.len(),
        });
    }

    let mut xs = samples.xs[..expected_x].to_vec();
    for i in 0..count {
        let delta = xs[2 * i + 1] - xs[2 * i];
        xs[2 * i + 1] = match mode {
            RadiusMode::Signed => delta,
            RadiusMode::Absolute => delta.abs(),
        };
    }

    let rois = xs
        .chunks_exact(2)
        .zip(&samples.ys)
        .map(|(pair, &y)| Roi {
            center_x: pair[0] as i64,
            center_y: y as i64,
            radius: pair[1] as i64,
        })
        .collect();

    Ok(rois)
}
