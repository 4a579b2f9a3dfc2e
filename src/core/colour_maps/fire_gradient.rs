use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::colour_maps::gradient_position::gradient_position;
use crate::core::data::colour::Colour;
use crate::core::data::frac_result::FracResult;

/// Black through red, orange and yellow to white.
#[derive(Debug)]
pub struct FireGradient {
    max_iterations: u32,
}

impl FireGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for FireGradient {
    fn map(&self, result: &FracResult) -> Result<Colour, ColourMapError> {
        let Some(t) = gradient_position(result, self.max_iterations)? else {
            return Ok(Colour::BLACK);
        };

        let (r, g, b) = if t < 0.25 {
            ((t / 0.25 * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            (255, ((t - 0.25) / 0.25 * 165.0) as u8, 0)
        } else if t < 0.75 {
            (255, (165.0 + (t - 0.5) / 0.25 * 90.0) as u8, 0)
        } else {
            (255, 255, ((t - 0.75) / 0.25 * 255.0) as u8)
        };

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        "Fire gradient"
    }
}
