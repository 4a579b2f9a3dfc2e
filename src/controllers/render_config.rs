use std::num::NonZeroUsize;
use std::path::PathBuf;

use num_complex::Complex64;

use crate::core::actions::iterate_domain::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::colour_maps::kinds::ColourMapKinds;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::polynomiograph::presets::{mandelbrot_style, newton_basins};
use crate::core::fractals::rational_julia::presets::inverse_square_julia;

const DEFAULT_WIDTH: usize = 700;
const DEFAULT_HEIGHT: usize = 400;
const DEFAULT_MAX_ITERATIONS: i64 = 256;
const DEFAULT_RADIUS: f64 = 2.0;
const DEFAULT_EPSILON: f64 = 1e-6;
const DEFAULT_NEWTON_DEGREE: u32 = 3;
const DEFAULT_OUTPUT: &str = "output/fractal.ppm";

fn default_julia_c() -> Complex64 {
    Complex64::new(-0.7, 0.27)
}

/// Everything needed for one render, from variant selection to output path.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub fractal: FractalKinds,
    /// `None` uses the fractal's default region.
    pub region: Option<ComplexRect>,
    pub width: usize,
    pub height: usize,
    pub max_iterations: i64,
    pub radius: f64,
    /// Fixed parameter for the Julia variants.
    pub julia_c: Complex64,
    /// Convergence threshold for the polynomiograph variants.
    pub epsilon: f64,
    pub newton_degree: u32,
    pub colour_map: ColourMapKinds,
    /// `None` sizes the worker pool to the available parallelism.
    pub workers: Option<NonZeroUsize>,
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fractal: FractalKinds::default(),
            region: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            radius: DEFAULT_RADIUS,
            julia_c: default_julia_c(),
            epsilon: DEFAULT_EPSILON,
            newton_degree: DEFAULT_NEWTON_DEGREE,
            colour_map: ColourMapKinds::default(),
            workers: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region.unwrap_or_else(|| self.fractal.default_region())
    }

    /// A fresh, unconfigured algorithm for the selected fractal.
    #[must_use]
    pub fn build_algorithm(&self) -> Box<dyn FractalAlgorithm> {
        match self.fractal {
            FractalKinds::Mandelbrot => Box::new(MandelbrotAlgorithm::new(self.radius)),
            FractalKinds::Julia => Box::new(JuliaAlgorithm::new(self.radius, self.julia_c)),
            FractalKinds::RationalJulia => Box::new(inverse_square_julia(self.radius, self.julia_c)),
            FractalKinds::Newton => Box::new(newton_basins(self.newton_degree, self.epsilon)),
            FractalKinds::MandelbrotPolynomiograph => Box::new(mandelbrot_style(self.epsilon)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_region_follows_fractal() {
        let config = RenderConfig {
            fractal: FractalKinds::Julia,
            ..RenderConfig::default()
        };

        assert_eq!(config.region(), FractalKinds::Julia.default_region());
    }

    #[test]
    fn test_explicit_region_wins() {
        let region = ComplexRect::new(Complex64::new(-0.1, -0.1), Complex64::new(0.1, 0.1)).unwrap();
        let config = RenderConfig {
            region: Some(region),
            ..RenderConfig::default()
        };

        assert_eq!(config.region(), region);
    }

    #[test]
    fn test_every_fractal_kind_builds() {
        for &fractal in FractalKinds::ALL {
            let config = RenderConfig {
                fractal,
                ..RenderConfig::default()
            };
            let mut algorithm = config.build_algorithm();

            assert!(algorithm.set_max_iterations(config.max_iterations).is_ok());
            let result = algorithm.evaluate(Complex64::new(0.25, 0.25));
            assert!(result.iterations < 256);
        }
    }

    #[test]
    fn test_radius_is_passed_through() {
        let config = RenderConfig {
            radius: 10.0,
            ..RenderConfig::default()
        };

        assert_eq!(config.build_algorithm().config().radius(), 10.0);
    }
}
