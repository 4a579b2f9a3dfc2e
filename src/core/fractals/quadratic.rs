use num_complex::Complex64;

use crate::core::data::frac_result::FracResult;
use crate::core::data::iteration_config::IterationConfig;

/// Config for the `z^2 + c` family: the given bailout radius and degree 2.
#[must_use]
pub fn quadratic_config(radius: f64) -> IterationConfig {
    let mut config = IterationConfig::new(radius);
    config.set_degree(2.0);
    config
}

/// Iterates `z -> z^2 + c` from `z0`.
///
/// The squared modulus is tested against `radius^2` before every step, and at
/// most `max_iterations - 1` steps are taken.
#[must_use]
pub fn quadratic_orbit(config: &IterationConfig, z0: Complex64, c: Complex64) -> FracResult {
    let radius_squared = config.radius() * config.radius();
    let last_iteration = config.last_iteration();

    let mut z = z0;
    let mut iterations = 0;

    while iterations < last_iteration && z.norm_sqr() <= radius_squared {
        z = z * z + c;
        iterations += 1;
    }

    FracResult::new(z, c, iterations)
}
