use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::colour_maps::banded_palette::BandedPalette;
use crate::core::colour_maps::gradient_position::gradient_position;
use crate::core::data::colour::Colour;
use crate::core::data::frac_result::FracResult;

/// Cycles through a banded palette, holding each band for `period` iterations,
/// independent of the iteration budget.
#[derive(Debug, Clone)]
pub struct PeriodicPalette {
    name: &'static str,
    period: u32,
    palette: BandedPalette,
}

impl PeriodicPalette {
    /// A `period` of 0 is treated as 1.
    #[must_use]
    pub fn new(name: &'static str, period: u32, palette: BandedPalette) -> Self {
        Self {
            name,
            period: period.max(1),
            palette,
        }
    }

    #[must_use]
    pub fn period(&self) -> u32 {
        self.period
    }
}

impl ColourMap for PeriodicPalette {
    fn map(&self, result: &FracResult) -> Result<Colour, ColourMapError> {
        if gradient_position(result, self.palette.max_iterations())?.is_none() {
            return Ok(Colour::BLACK);
        }

        let cycle = u64::from(self.period) * self.palette.bands().len().max(1) as u64;
        let t = (u64::from(result.iterations) % cycle) as f64 / cycle as f64;

        Ok(self.palette.colour_at(t))
    }

    fn display_name(&self) -> &str {
        self.name
    }
}
