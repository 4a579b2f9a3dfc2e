pub mod banded_palette;
pub mod blue_white_gradient;
pub mod factory;
pub mod fire_gradient;
mod gradient_position;
pub mod kinds;
pub mod periodic_palette;
pub mod presets;
pub mod spectral_palette;
