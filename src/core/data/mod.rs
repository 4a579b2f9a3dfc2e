pub mod colour;
pub mod complex_rect;
pub mod frac_result;
pub mod iteration_config;
pub mod pixel_buffer;
pub mod results;
pub mod sample_grid;
