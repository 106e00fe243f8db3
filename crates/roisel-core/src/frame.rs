use ndarray::Array2;

/// A single grayscale image frame.
/// Pixel values are f32, normally in [0.0, 1.0].
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
}

impl Frame {
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Largest sample value, or `None` for an empty frame or one holding NaNs only.
    pub fn max_value(&self) -> Option<f32> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f32| m.max(v))))
    }

    /// Divide every sample by the frame maximum so the brightest pixel is 1.0.
    ///
    /// Returns `false` and leaves the data untouched when the maximum is not a
    /// positive finite number.
    pub fn normalize_by_max(&mut self) -> bool {
        match self.max_value() {
            Some(max) if max.is_finite() && max > 0.0 => {
                self.data.mapv_inplace(|v| v / max);
                true
            }
            _ => false,
        }
    }
}
