use num_complex::Complex64;
use thiserror::Error;

use crate::core::actions::iterate_domain::ports::domain::{Domain, DomainAccessError};
use crate::core::data::complex_rect::ComplexRect;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SampleGridError {
    #[error("sample grid must be sampled at least once along each axis: {cols}x{rows}")]
    InvalidSize { cols: usize, rows: usize },
}

/// Uniform `cols` x `rows` sampling of a [`ComplexRect`].
///
/// Column 0 maps to the rect's minimum real part and row 0 to its maximum
/// imaginary part, so row order matches image scanline order. A single sample
/// along an axis sits at the centre of that axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SampleGrid {
    region: ComplexRect,
    cols: usize,
    rows: usize,
}

impl SampleGrid {
    pub fn new(region: ComplexRect, cols: usize, rows: usize) -> Result<Self, SampleGridError> {
        if cols == 0 || rows == 0 {
            return Err(SampleGridError::InvalidSize { cols, rows });
        }

        Ok(Self { region, cols, rows })
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }
}

fn axis_fraction(index: usize, samples: usize) -> f64 {
    if samples == 1 {
        0.5
    } else {
        index as f64 / (samples - 1) as f64
    }
}

impl Domain for SampleGrid {
    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn at(&self, col: usize, row: usize) -> Result<Complex64, DomainAccessError> {
        if col >= self.cols || row >= self.rows {
            return Err(DomainAccessError::OutOfRange {
                col,
                row,
                cols: self.cols,
                rows: self.rows,
            });
        }

        let re = self.region.top_left().re + axis_fraction(col, self.cols) * self.region.width();
        let im =
            self.region.bottom_right().im - axis_fraction(row, self.rows) * self.region.height();

        Ok(Complex64::new(re, im))
    }
}
