mod controllers;
mod core;
mod storage;

pub use controllers::render::{RenderError, RenderSummary, iterate_config, render_controller};
pub use controllers::render_config::RenderConfig;

pub use crate::core::actions::cancellation::{CancelFlag, CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
pub use crate::core::actions::iterate_domain::errors::IterateDomainError;
pub use crate::core::actions::iterate_domain::iterate_domain::{iterate_domain, iterate_domain_cancelable};
pub use crate::core::actions::iterate_domain::iterate_domain_serial::iterate_domain_serial;
pub use crate::core::actions::iterate_domain::ports::domain::{Domain, DomainAccessError};
pub use crate::core::actions::iterate_domain::ports::fractal_algorithm::FractalAlgorithm;

pub use crate::core::colour_maps::banded_palette::{BandStyle, BandedPalette};
pub use crate::core::colour_maps::blue_white_gradient::BlueWhiteGradient;
pub use crate::core::colour_maps::factory::colour_map_factory;
pub use crate::core::colour_maps::fire_gradient::FireGradient;
pub use crate::core::colour_maps::kinds::ColourMapKinds;
pub use crate::core::colour_maps::periodic_palette::PeriodicPalette;
pub use crate::core::colour_maps::presets as palettes;
pub use crate::core::colour_maps::spectral_palette::SpectralPalette;

pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::frac_result::FracResult;
pub use crate::core::data::iteration_config::{ConfigurationError, IterationConfig};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::results::{Results, ResultsError};
pub use crate::core::data::sample_grid::{SampleGrid, SampleGridError};

pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, is_cardioid_or_period2_bulb};
pub use crate::core::fractals::polynomiograph::algorithm::PolynomiographAlgorithm;
pub use crate::core::fractals::polynomiograph::presets::{mandelbrot_style, newton_basins};
pub use crate::core::fractals::quadratic::{quadratic_config, quadratic_orbit};
pub use crate::core::fractals::rational_julia::algorithm::RationalJuliaAlgorithm;
pub use crate::core::fractals::rational_julia::presets::inverse_square_julia;

pub use crate::core::util::calculate_worker_count::calculate_worker_count;

pub use storage::write_ppm::{write_ppm, write_ppm_to};
