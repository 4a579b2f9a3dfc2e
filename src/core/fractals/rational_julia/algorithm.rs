use std::fmt;

use num_complex::Complex64;

use crate::core::actions::iterate_domain::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frac_result::FracResult;
use crate::core::data::iteration_config::IterationConfig;

/// Julia set of a rational map `z -> P(z) / Q(z) + C`.
///
/// There is no cheap bound on `|z|^2` for an arbitrary rational map, so the
/// bailout test compares the plain modulus against the radius. A pole
/// produces an infinite or NaN iterate, which the test treats as escaped.
pub struct RationalJuliaAlgorithm<P, Q> {
    config: IterationConfig,
    p: P,
    q: Q,
    c: Complex64,
}

impl<P, Q> RationalJuliaAlgorithm<P, Q>
where
    P: Fn(Complex64) -> Complex64,
    Q: Fn(Complex64) -> Complex64,
{
    #[must_use]
    pub fn new(radius: f64, p: P, q: Q, c: Complex64) -> Self {
        Self {
            config: IterationConfig::new(radius),
            p,
            q,
            c,
        }
    }

    /// Degree of the rational map, used for smooth-colouring normalisation.
    #[must_use]
    pub fn with_degree(mut self, degree: f64) -> Self {
        self.config.set_degree(degree);
        self
    }

    #[must_use]
    pub fn c(&self) -> Complex64 {
        self.c
    }
}

impl<P, Q> fmt::Debug for RationalJuliaAlgorithm<P, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RationalJuliaAlgorithm")
            .field("config", &self.config)
            .field("c", &self.c)
            .finish_non_exhaustive()
    }
}

fn is_within(z: Complex64, radius: f64) -> bool {
    // NaN compares false, so a NaN iterate counts as escaped
    z.norm() <= radius
}

impl<P, Q> FractalAlgorithm for RationalJuliaAlgorithm<P, Q>
where
    P: Fn(Complex64) -> Complex64 + Send + Sync,
    Q: Fn(Complex64) -> Complex64 + Send + Sync,
{
    fn evaluate(&self, point: Complex64) -> FracResult {
        let radius = self.config.radius();
        let last_iteration = self.config.last_iteration();

        let mut z = point;
        let mut iterations = 0;

        while iterations < last_iteration && is_within(z, radius) {
            z = (self.p)(z) / (self.q)(z) + self.c;
            iterations += 1;
        }

        FracResult::new(z, self.c, iterations)
    }

    fn config(&self) -> &IterationConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut IterationConfig {
        &mut self.config
    }
}
