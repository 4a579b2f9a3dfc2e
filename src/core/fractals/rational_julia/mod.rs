pub mod algorithm;
pub mod presets;
