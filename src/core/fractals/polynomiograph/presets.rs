use num_complex::Complex64;

use crate::core::fractals::polynomiograph::algorithm::PolynomiographAlgorithm;

type ComplexMap = fn(Complex64) -> Complex64;

fn zero(_: Complex64) -> Complex64 {
    Complex64::new(0.0, 0.0)
}

fn identity(z: Complex64) -> Complex64 {
    z
}

fn square(z: Complex64) -> Complex64 {
    z * z
}

/// Newton's method for `z^degree - 1`. Each sample converges to one of the
/// `degree` roots of unity, and the iteration count shades the basins.
/// Degrees below 2 are raised to 2.
#[must_use]
pub fn newton_basins(
    degree: u32,
    epsilon: f64,
) -> PolynomiographAlgorithm<impl Fn(Complex64) -> Complex64 + Send + Sync, ComplexMap, ComplexMap> {
    let degree = degree.max(2);
    let n = f64::from(degree);

    let newton_step = move |z: Complex64| z - (z.powu(degree) - 1.0) / (z.powu(degree - 1) * n);

    PolynomiographAlgorithm::new(epsilon, newton_step, zero as ComplexMap, identity as ComplexMap)
}

/// Mandelbrot-flavoured coupling: `z -> z^2 - c` with `c` fixed at the sample.
#[must_use]
pub fn mandelbrot_style(epsilon: f64) -> PolynomiographAlgorithm<ComplexMap, ComplexMap, ComplexMap> {
    PolynomiographAlgorithm::new(
        epsilon,
        square as ComplexMap,
        identity as ComplexMap,
        identity as ComplexMap,
    )
}
