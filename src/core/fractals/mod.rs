pub mod fractal_kinds;
pub mod julia;
pub mod mandelbrot;
pub mod polynomiograph;
pub mod quadratic;
pub mod rational_julia;
