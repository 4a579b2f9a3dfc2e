use num_complex::Complex64;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// Axis-aligned region of the complex plane. `top_left` holds the minimum
/// real and imaginary parts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex64,
    bottom_right: Complex64,
}

impl ComplexRect {
    pub fn new(top_left: Complex64, bottom_right: Complex64) -> Result<Self, ComplexRectError> {
        let width = bottom_right.re - top_left.re;
        let height = bottom_right.im - top_left.im;

        if !(width > 0.0 && height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Rectangle of the given size centred on `centre`.
    pub fn centred(centre: Complex64, width: f64, height: f64) -> Result<Self, ComplexRectError> {
        let half = Complex64::new(width / 2.0, height / 2.0);
        Self::new(centre - half, centre + half)
    }

    #[must_use]
    pub fn top_left(&self) -> Complex64 {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex64 {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.re - self.top_left.re
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.im - self.top_left.im
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex64) -> bool {
        self.top_left.re <= point.re
            && self.top_left.im <= point.im
            && self.bottom_right.re >= point.re
            && self.bottom_right.im >= point.im
    }
}
