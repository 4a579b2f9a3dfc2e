use std::fmt;

use num_complex::Complex64;

use crate::core::actions::iterate_domain::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frac_result::FracResult;
use crate::core::data::iteration_config::IterationConfig;

/// Generalised Newton-style iteration, visualised by basins of convergence.
///
/// Two sequences are advanced together:
///
/// ```text
/// z_0 = sample,         c_0 = F(sample)
/// z_{n+1} = B(z_n) - c_n
/// c_{n+1} = G(c_n)
/// ```
///
/// Iteration stops once `|z_{n+1} - z_n| < epsilon`, leaving `z_n` in the
/// result, or after `max_iterations - 1` steps. There is no bailout radius.
pub struct PolynomiographAlgorithm<B, F, G> {
    config: IterationConfig,
    b: B,
    f: F,
    g: G,
    epsilon: f64,
}

impl<B, F, G> PolynomiographAlgorithm<B, F, G>
where
    B: Fn(Complex64) -> Complex64,
    F: Fn(Complex64) -> Complex64,
    G: Fn(Complex64) -> Complex64,
{
    /// `b` is the root-finding map (Newton, Halley or higher order), `f` maps
    /// the sample to the initial `c`, `g` advances `c` after every step.
    #[must_use]
    pub fn new(epsilon: f64, b: B, f: F, g: G) -> Self {
        Self {
            config: IterationConfig::new(f64::INFINITY),
            b,
            f,
            g,
            epsilon,
        }
    }

    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl<B, F, G> fmt::Debug for PolynomiographAlgorithm<B, F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolynomiographAlgorithm")
            .field("config", &self.config)
            .field("epsilon", &self.epsilon)
            .finish_non_exhaustive()
    }
}

impl<B, F, G> FractalAlgorithm for PolynomiographAlgorithm<B, F, G>
where
    B: Fn(Complex64) -> Complex64 + Send + Sync,
    F: Fn(Complex64) -> Complex64 + Send + Sync,
    G: Fn(Complex64) -> Complex64 + Send + Sync,
{
    fn evaluate(&self, point: Complex64) -> FracResult {
        let last_iteration = self.config.last_iteration();

        let mut z = point;
        let mut c = (self.f)(point);
        let mut iterations = 0;

        while iterations < last_iteration {
            let z_next = (self.b)(z) - c;
            if (z_next - z).norm() < self.epsilon {
                break;
            }

            c = (self.g)(c);
            z = z_next;
            iterations += 1;
        }

        FracResult::new(z, c, iterations)
    }

    fn config(&self) -> &IterationConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut IterationConfig {
        &mut self.config
    }
}
