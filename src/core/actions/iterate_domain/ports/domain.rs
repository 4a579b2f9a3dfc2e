use num_complex::Complex64;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum DomainAccessError {
    #[error("sample (col: {col}, row: {row}) is outside a {cols}x{rows} domain")]
    OutOfRange {
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    },
}

/// A grid of sample points in the complex plane.
pub trait Domain {
    /// Returns `(rows, cols)`.
    fn dimensions(&self) -> (usize, usize);

    fn at(&self, col: usize, row: usize) -> Result<Complex64, DomainAccessError>;
}
