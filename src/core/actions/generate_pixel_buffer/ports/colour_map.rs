use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::data::frac_result::FracResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColourMapError {
    #[error("iterations {iterations} exceeds maximum {max_iterations}")]
    IterationsExceedMax { iterations: u32, max_iterations: u32 },
}

/// Turns an iteration record into a colour.
pub trait ColourMap: Send + Sync {
    fn map(&self, result: &FracResult) -> Result<Colour, ColourMapError>;

    fn display_name(&self) -> &str;
}

impl<CMap: ColourMap + ?Sized> ColourMap for Box<CMap> {
    fn map(&self, result: &FracResult) -> Result<Colour, ColourMapError> {
        (**self).map(result)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
