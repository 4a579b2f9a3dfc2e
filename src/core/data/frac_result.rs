use num_complex::Complex64;

/// Outcome of iterating a single sample point.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct FracResult {
    /// Final iterate.
    pub z: Complex64,
    /// Parameter actually used by the recurrence.
    pub c: Complex64,
    /// Steps taken before escape or convergence, at most `max_iterations - 1`.
    pub iterations: u32,
    /// Reserved for renormalised iteration counts. Always 0 for now.
    pub smooth_factor: f64,
}

impl FracResult {
    #[must_use]
    pub fn new(z: Complex64, c: Complex64, iterations: u32) -> Self {
        Self {
            z,
            c,
            iterations,
            smooth_factor: 0.0,
        }
    }
}
