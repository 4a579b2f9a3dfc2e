//! Named palettes. Each call builds a fresh map sized to the run's
//! iteration budget.

use crate::core::colour_maps::banded_palette::BandedPalette;
use crate::core::colour_maps::periodic_palette::PeriodicPalette;
use crate::core::colour_maps::spectral_palette::SpectralPalette;
use crate::core::data::colour::Colour;

fn pretty_band_colours() -> Vec<Colour> {
    vec![
        Colour::from_hsv(24.0, 0.38, 0.33),
        Colour::from_hsv(158.0, 0.48, 0.73),
        Colour::from_hsv(58.0, 0.72, 0.83),
        Colour::from_hsv(58.0, 0.32, 0.95),
        Colour::from_hsv(24.0, 0.86, 0.97),
    ]
}

fn pretty_band_colours_2() -> Vec<Colour> {
    vec![
        Colour::from_hsv(27.0, 0.75, 0.25),
        Colour::from_hsv(188.0, 0.35, 0.82),
        Colour::from_hsv(175.0, 0.13, 0.91),
        Colour::from_hsv(35.0, 0.17, 0.85),
        Colour::from_hsv(52.0, 0.06, 1.00),
    ]
}

fn bw_band_colours() -> Vec<Colour> {
    vec![Colour::BLACK, Colour::WHITE]
}

/// Full hue circle starting at red.
#[must_use]
pub fn spectrum(max_iterations: u32) -> SpectralPalette {
    SpectralPalette::new("Spectrum", max_iterations, 360.0)
}

/// Discrete bands of blue, brown and cream.
#[must_use]
pub fn pretty_bands(max_iterations: u32) -> BandedPalette {
    BandedPalette::uniform("Pretty bands", max_iterations, pretty_band_colours())
}

/// Like [`pretty_bands`] with more orange.
#[must_use]
pub fn pretty_bands_2(max_iterations: u32) -> BandedPalette {
    BandedPalette::uniform("Pretty bands 2", max_iterations, pretty_band_colours_2())
}

#[must_use]
pub fn bw_bands(max_iterations: u32) -> BandedPalette {
    BandedPalette::uniform("Black and white bands", max_iterations, bw_band_colours())
}

#[must_use]
pub fn pretty_blends(max_iterations: u32) -> BandedPalette {
    pretty_bands(max_iterations).blended("Pretty blends")
}

#[must_use]
pub fn pretty_blends_2(max_iterations: u32) -> BandedPalette {
    pretty_bands_2(max_iterations).blended("Pretty blends 2")
}

#[must_use]
pub fn bw_blends(max_iterations: u32) -> BandedPalette {
    bw_bands(max_iterations).blended("Black and white blends")
}

#[must_use]
pub fn pretty_periodic(max_iterations: u32) -> PeriodicPalette {
    PeriodicPalette::new("Pretty periodic", 1, pretty_bands(max_iterations))
}

#[must_use]
pub fn pretty_periodic_2(max_iterations: u32) -> PeriodicPalette {
    PeriodicPalette::new("Pretty periodic 2", 10, pretty_bands_2(max_iterations))
}

/// One-iteration black and white stripes.
#[must_use]
pub fn bw_stripes(max_iterations: u32) -> PeriodicPalette {
    PeriodicPalette::new("Black and white stripes", 1, bw_bands(max_iterations))
}
