pub mod cancellation;
pub mod generate_pixel_buffer;
pub mod iterate_domain;
