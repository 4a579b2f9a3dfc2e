use num_complex::Complex64;

use crate::core::actions::iterate_domain::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frac_result::FracResult;
use crate::core::data::iteration_config::IterationConfig;
use crate::core::fractals::quadratic::{quadratic_config, quadratic_orbit};

/// The Mandelbrot set: `z -> z^2 + c` from `z0 = 0`, with the sample point as `c`.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    config: IterationConfig,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self {
            config: quadratic_config(radius),
        }
    }
}

/// Whether `c` lies in the main cardioid or the period-2 bulb, where orbits
/// never escape.
#[must_use]
pub fn is_cardioid_or_period2_bulb(c: Complex64) -> bool {
    let p = c.re - 0.25;
    let im_squared = c.im * c.im;
    let q = p * p + im_squared;

    if q * (q + p) <= 0.25 * im_squared {
        return true;
    }

    (c.re + 1.0) * (c.re + 1.0) + im_squared <= 0.0625
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn evaluate(&self, point: Complex64) -> FracResult {
        if is_cardioid_or_period2_bulb(point) {
            return FracResult::new(point, Complex64::new(0.0, 0.0), self.config.last_iteration());
        }

        quadratic_orbit(&self.config, Complex64::new(0.0, 0.0), point)
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

    fn mandelbrot(max_iterations: i64) -> MandelbrotAlgorithm {
        let mut algorithm = MandelbrotAlgorithm::new(2.0);
        algorithm.set_max_iterations(max_iterations).unwrap();
        algorithm
    }

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [1, 2, 10, 256] {
            let result = mandelbrot(max_iterations).evaluate(Complex64::new(0.0, 0.0));

            assert_eq!(result.iterations, (max_iterations - 1) as u32);
        }
    }

    #[test]
    fn test_interior_shortcut_reports_point_and_zero_parameter() {
        let point = Complex64::new(-0.1, 0.1);
        let result = mandelbrot(100).evaluate(point);

        assert_eq!(result.z, point);
        assert_eq!(result.c, Complex64::new(0.0, 0.0));
        assert_eq!(result.iterations, 99);
    }

    #[test]
    fn test_exterior_point_escapes_quickly() {
        for max_iterations in [5, 10, 1000] {
            let result = mandelbrot(max_iterations).evaluate(Complex64::new(2.0, 0.0));

            assert!(result.iterations < (max_iterations - 1) as u32);
        }
    }

    #[test]
    fn test_exterior_point_reports_sample_as_parameter() {
        let point = Complex64::new(1.0, 1.0);
        let result = mandelbrot(100).evaluate(point);

        assert_eq!(result.c, point);
    }

    #[test]
    fn test_cardioid_and_bulb_detection() {
        assert!(is_cardioid_or_period2_bulb(Complex64::new(0.0, 0.0)));
        assert!(is_cardioid_or_period2_bulb(Complex64::new(0.2, 0.0)));
        assert!(is_cardioid_or_period2_bulb(Complex64::new(-1.0, 0.0)));
        assert!(is_cardioid_or_period2_bulb(Complex64::new(-1.2, 0.1)));
        assert!(!is_cardioid_or_period2_bulb(Complex64::new(0.5, 0.0)));
        assert!(!is_cardioid_or_period2_bulb(Complex64::new(-2.0, 0.0)));
        assert!(!is_cardioid_or_period2_bulb(Complex64::new(0.0, 1.0)));
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let algorithm = mandelbrot(500);
        let point = Complex64::new(-0.743643887, 0.131825904);

        let first = algorithm.evaluate(point);
        let second = algorithm.evaluate(point);

        assert_eq!(first.z.re.to_bits(), second.z.re.to_bits());
        assert_eq!(first.z.im.to_bits(), second.z.im.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn test_degree_is_two() {
        assert_eq!(MandelbrotAlgorithm::new(2.0).config().degree(), 2.0);
    }
}
