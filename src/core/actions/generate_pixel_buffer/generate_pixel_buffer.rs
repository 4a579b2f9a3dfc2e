use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::results::Results;

#[derive(Debug, Error)]
pub enum GeneratePixelBufferError {
    #[error("colour map error: {0}")]
    ColourMap(#[from] ColourMapError),

    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Colours every record of `results`, one image row per result row.
pub fn generate_pixel_buffer<CMap>(
    results: &Results,
    colour_map: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap + ?Sized,
{
    let (width, height) = (results.cols(), results.rows());
    let mut data = vec![0u8; width * height * 3];

    if width > 0 {
        data.par_chunks_mut(width * 3)
            .zip(results.records().par_chunks(width))
            .try_for_each(|(pixels, records)| {
                for (pixel, record) in pixels.chunks_exact_mut(3).zip(records) {
                    let colour = colour_map.map(record)?;
                    pixel.copy_from_slice(&[colour.r, colour.g, colour.b]);
                }
                Ok::<(), ColourMapError>(())
            })?;
    }

    Ok(PixelBuffer::from_data(width, height, data)?)
}
