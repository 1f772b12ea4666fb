pub mod config;
pub mod lanes;
pub mod plan;
pub mod presets;
