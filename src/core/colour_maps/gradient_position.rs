use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMapError;
use crate::core::data::frac_result::FracResult;

/// Where a record sits on a gradient: `None` for samples that used the whole
/// iteration budget, otherwise `iterations / (max_iterations - 1)` in `[0, 1)`.
pub(super) fn gradient_position(result: &FracResult, max_iterations: u32) -> Result<Option<f64>, ColourMapError> {
    let last_iteration = max_iterations.saturating_sub(1);

    if result.iterations > last_iteration {
        return Err(ColourMapError::IterationsExceedMax {
            iterations: result.iterations,
            max_iterations,
        });
    }

    if result.iterations == last_iteration {
        return Ok(None);
    }

    Ok(Some(f64::from(result.iterations) / f64::from(last_iteration)))
}
