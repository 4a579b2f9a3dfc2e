use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::colour_maps::gradient_position::gradient_position;
use crate::core::data::colour::Colour;
use crate::core::data::frac_result::FracResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandStyle {
    /// Hard edges between equally wide bands.
    Uniform,
    /// Linear blend from each band colour to the next.
    Blended,
}

/// A list of band colours spread evenly over the escaping iterations.
///
/// An empty band list maps every record to black.
#[derive(Debug, Clone)]
pub struct BandedPalette {
    name: &'static str,
    max_iterations: u32,
    bands: Vec<Colour>,
    style: BandStyle,
}

impl BandedPalette {
    #[must_use]
    pub fn uniform(name: &'static str, max_iterations: u32, bands: Vec<Colour>) -> Self {
        Self {
            name,
            max_iterations,
            bands,
            style: BandStyle::Uniform,
        }
    }

    /// The same bands, interpolated.
    #[must_use]
    pub fn blended(self, name: &'static str) -> Self {
        Self {
            name,
            style: BandStyle::Blended,
            ..self
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn bands(&self) -> &[Colour] {
        &self.bands
    }

    #[must_use]
    pub fn style(&self) -> BandStyle {
        self.style
    }

    /// Colour at `t` in `[0, 1)`.
    pub(super) fn colour_at(&self, t: f64) -> Colour {
        let count = self.bands.len();
        if count == 0 {
            return Colour::BLACK;
        }

        match self.style {
            BandStyle::Uniform => {
                let index = ((t * count as f64) as usize).min(count - 1);
                self.bands[index]
            }
            BandStyle::Blended => {
                let position = t.clamp(0.0, 1.0) * (count - 1) as f64;
                let lower = (position as usize).min(count - 1);
                let upper = (lower + 1).min(count - 1);
                self.bands[lower].lerp(self.bands[upper], position - lower as f64)
            }
        }
    }
}

impl ColourMap for BandedPalette {
    fn map(&self, result: &FracResult) -> Result<Colour, ColourMapError> {
        let Some(t) = gradient_position(result, self.max_iterations)? else {
            return Ok(Colour::BLACK);
        };

        Ok(self.colour_at(t))
    }

    fn display_name(&self) -> &str {
        self.name
    }
}
