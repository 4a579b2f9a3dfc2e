pub mod domain;
pub mod fractal_algorithm;
