use num_complex::Complex64;

use crate::core::data::frac_result::FracResult;
use crate::core::data::iteration_config::{ConfigurationError, IterationConfig};

/// Maps a point of the complex plane to the result of a fractal iteration.
///
/// Evaluation only reads the config, so a configured algorithm can be shared
/// across workers by reference.
pub trait FractalAlgorithm: Send + Sync {
    fn evaluate(&self, point: Complex64) -> FracResult;

    fn config(&self) -> &IterationConfig;

    fn config_mut(&mut self) -> &mut IterationConfig;

    fn set_max_iterations(&mut self, max_iterations: i64) -> Result<(), ConfigurationError> {
        self.config_mut().set_max_iterations(max_iterations)
    }
}

impl<Alg: FractalAlgorithm + ?Sized> FractalAlgorithm for Box<Alg> {
    fn evaluate(&self, point: Complex64) -> FracResult {
        (**self).evaluate(point)
    }

    fn config(&self) -> &IterationConfig {
        (**self).config()
    }

    fn config_mut(&mut self) -> &mut IterationConfig {
        (**self).config_mut()
    }

    fn set_max_iterations(&mut self, max_iterations: i64) -> Result<(), ConfigurationError> {
        (**self).set_max_iterations(max_iterations)
    }
}
