use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::info;

use crate::controllers::render_config::RenderConfig;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::iterate_domain::errors::IterateDomainError;
use crate::core::actions::iterate_domain::iterate_domain::{iterate_domain, iterate_domain_cancelable};
use crate::core::colour_maps::factory::colour_map_factory;
use crate::core::data::results::Results;
use crate::core::data::sample_grid::{SampleGrid, SampleGridError};
use crate::storage::write_ppm::write_ppm;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid sample grid: {0}")]
    SampleGrid(#[from] SampleGridError),

    #[error(transparent)]
    IterateDomain(#[from] IterateDomainError),

    #[error(transparent)]
    PixelBuffer(#[from] GeneratePixelBufferError),

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub width: usize,
    pub height: usize,
    pub elapsed: Duration,
    /// Samples that used the whole iteration budget.
    pub exhausted_samples: u64,
}

/// Iterates the configured fractal over its sample grid.
pub fn iterate_config(config: &RenderConfig) -> Result<Results, RenderError> {
    let domain = SampleGrid::new(config.region(), config.width, config.height)?;
    let mut algorithm = config.build_algorithm();

    let results = match config.workers {
        Some(workers) => iterate_domain_cancelable(
            &domain,
            &mut algorithm,
            config.max_iterations,
            workers,
            &NeverCancel,
        )?,
        None => iterate_domain(&domain, &mut algorithm, config.max_iterations)?,
    };

    Ok(results)
}

/// Renders the configured fractal and writes it to `config.output`.
pub fn render_controller(config: &RenderConfig) -> Result<RenderSummary, RenderError> {
    info!(
        fractal = %config.fractal,
        width = config.width,
        height = config.height,
        max_iterations = config.max_iterations,
        "rendering"
    );

    let start = Instant::now();
    let results = iterate_config(config)?;
    let elapsed = start.elapsed();

    let colour_map = colour_map_factory(config.colour_map, results.iteration_capacity());
    let pixel_buffer = generate_pixel_buffer(&results, &colour_map)?;
    write_ppm(&pixel_buffer, &config.output)?;

    let last_iteration = results.iteration_capacity().saturating_sub(1);
    let exhausted_samples = results
        .histogram()
        .and_then(|histogram| histogram.get(&last_iteration).copied())
        .unwrap_or(0);

    info!(output = %config.output.display(), ?elapsed, "saved");

    Ok(RenderSummary {
        width: pixel_buffer.width(),
        height: pixel_buffer.height(),
        elapsed,
        exhausted_samples,
    })
}
