use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::colour_maps::gradient_position::gradient_position;
use crate::core::data::colour::Colour;
use crate::core::data::frac_result::FracResult;

#[derive(Debug)]
pub struct BlueWhiteGradient {
    max_iterations: u32,
}

impl BlueWhiteGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for BlueWhiteGradient {
    fn map(&self, result: &FracResult) -> Result<Colour, ColourMapError> {
        let Some(t) = gradient_position(result, self.max_iterations)? else {
            return Ok(Colour::BLACK);
        };

        let r = (9.0 * (1.0 - t) * t * t * t * 255.0) as u8;
        let g = (15.0 * (1.0 - t) * (1.0 - t) * t * t * 255.0) as u8;
        let b = (8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t * 255.0) as u8;

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        "Blue-white gradient"
    }
}
