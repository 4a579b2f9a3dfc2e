use num_complex::Complex64;

use crate::core::actions::iterate_domain::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frac_result::FracResult;
use crate::core::data::iteration_config::IterationConfig;
use crate::core::fractals::quadratic::{quadratic_config, quadratic_orbit};

/// The quadratic Julia set `z -> z^2 + C`: the sample point is the starting
/// value and `C` stays fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct JuliaAlgorithm {
    config: IterationConfig,
    c: Complex64,
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(radius: f64, c: Complex64) -> Self {
        Self {
            config: quadratic_config(radius),
            c,
        }
    }

    #[must_use]
    pub fn c(&self) -> Complex64 {
        self.c
    }
}

impl FractalAlgorithm for JuliaAlgorithm {
    fn evaluate(&self, point: Complex64) -> FracResult {
        quadratic_orbit(&self.config, point, self.c)
    }

    fn config(&self) -> &IterationConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut IterationConfig {
        &mut self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn julia(c: Complex64, max_iterations: i64) -> JuliaAlgorithm {
        let mut algorithm = JuliaAlgorithm::new(2.0, c);
        algorithm.set_max_iterations(max_iterations).unwrap();
        algorithm
    }

    #[test]
    fn test_zero_is_fixed_point_of_z_squared() {
        for max_iterations in [1, 3, 64] {
            let result = julia(Complex64::new(0.0, 0.0), max_iterations).evaluate(Complex64::new(0.0, 0.0));

            assert_eq!(result.iterations, (max_iterations - 1) as u32);
            assert_eq!(result.z, Complex64::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_parameter_is_fixed_not_sampled() {
        let c = Complex64::new(-0.7, 0.27);
        let result = julia(c, 100).evaluate(Complex64::new(1.5, -1.5));

        assert_eq!(result.c, c);
    }

    #[test]
    fn test_point_outside_radius_escapes_immediately() {
        let point = Complex64::new(2.5, 0.0);
        let result = julia(Complex64::new(-0.7, 0.27), 100).evaluate(point);

        assert_eq!(result.iterations, 0);
        assert_eq!(result.z, point);
    }

    #[test]
    fn test_unit_circle_is_bounded_for_zero_parameter() {
        let result = julia(Complex64::new(0.0, 0.0), 200).evaluate(Complex64::new(0.0, 1.0));

        assert_eq!(result.iterations, 199);
    }

    #[test]
    fn test_set_max_iterations_one_forces_zero_iterations() {
        let mut algorithm = JuliaAlgorithm::new(2.0, Complex64::new(0.3, 0.5));

        assert!(algorithm.set_max_iterations(1).is_ok());
        assert_eq!(algorithm.evaluate(Complex64::new(0.1, 0.1)).iterations, 0);
        assert!(algorithm.set_max_iterations(0).is_err());
        assert!(algorithm.set_max_iterations(-1).is_err());
    }
}
