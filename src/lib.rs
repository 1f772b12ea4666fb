pub mod commands;
pub mod config;
pub mod fixtures;
pub mod formatting;
pub mod planner;
pub mod presets;
pub mod tui;
