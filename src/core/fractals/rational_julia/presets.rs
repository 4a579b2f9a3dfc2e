use num_complex::Complex64;

use crate::core::fractals::rational_julia::algorithm::RationalJuliaAlgorithm;

pub type ComplexFn = fn(Complex64) -> Complex64;

fn unit(_: Complex64) -> Complex64 {
    Complex64::new(1.0, 0.0)
}

fn square(z: Complex64) -> Complex64 {
    z * z
}

/// `z -> 1 / z^2 + C`.
#[must_use]
pub fn inverse_square_julia(radius: f64, c: Complex64) -> RationalJuliaAlgorithm<ComplexFn, ComplexFn> {
    RationalJuliaAlgorithm::new(radius, unit as ComplexFn, square as ComplexFn, c).with_degree(2.0)
}
