use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::colour_maps::gradient_position::gradient_position;
use crate::core::data::colour::Colour;
use crate::core::data::frac_result::FracResult;

/// Fully saturated hue sweep starting at red. `sweep` is the number of
/// degrees covered between the first and the last escaping iteration.
#[derive(Debug)]
pub struct SpectralPalette {
    name: &'static str,
    max_iterations: u32,
    sweep: f64,
}

impl SpectralPalette {
    #[must_use]
    pub fn new(name: &'static str, max_iterations: u32, sweep: f64) -> Self {
        Self {
            name,
            max_iterations,
            sweep,
        }
    }

    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }
}

impl ColourMap for SpectralPalette {
    fn map(&self, result: &FracResult) -> Result<Colour, ColourMapError> {
        let Some(t) = gradient_position(result, self.max_iterations)? else {
            return Ok(Colour::BLACK);
        };

        Ok(Colour::from_hsv(t * self.sweep, 1.0, 1.0))
    }

    fn display_name(&self) -> &str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn record(iterations: u32) -> FracResult {
        FracResult::new(Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), iterations)
    }

    #[test]
    fn test_sweep_starts_at_red() {
        let palette = SpectralPalette::new("Spectrum", 361, 360.0);

        assert_eq!(palette.map(&record(0)).unwrap(), Colour { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_hue_follows_iterations() {
        let palette = SpectralPalette::new("Wide", 5, 480.0);

        assert_eq!(palette.map(&record(1)).unwrap(), Colour { r: 0, g: 255, b: 0 });
        assert_eq!(palette.map(&record(2)).unwrap(), Colour { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_narrow_sweep_stays_warm() {
        let palette = SpectralPalette::new("Warm", 101, 60.0);
        let colour = palette.map(&record(99)).unwrap();

        assert_eq!(colour.r, 255);
        assert_eq!(colour.b, 0);
    }

    #[test]
    fn test_exhausted_budget_is_black() {
        let palette = SpectralPalette::new("Spectrum", 361, 360.0);

        assert_eq!(palette.map(&record(360)).unwrap(), Colour::BLACK);
        assert!(palette.map(&record(361)).is_err());
    }
}
