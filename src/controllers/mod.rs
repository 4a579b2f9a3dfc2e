pub mod render;
pub mod render_config;
