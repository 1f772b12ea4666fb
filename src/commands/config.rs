use std::path::Path;

use crate::config::{get_config_path, Config};

/// Describe the configuration file location and effective settings
pub fn format_config(cfg: &Config, path: Option<&Path>) -> String {
    let mut output = String::new();

    let (path_str, exists) = match path {
        Some(path) => (path.display().to_string(), path.exists()),
        None => ("Unable to determine config path".to_string(), false),
    };

    output.push_str(&format!(
        "Configuration File: {} (Exists: {})\n\n",
        path_str,
        if exists { "yes" } else { "no" }
    ));
    output.push_str("Current Configuration:\n");
    output.push_str("=====================\n");
    output.push_str(&format!("log_level: {}\n", cfg.log_level));
    output.push_str(&format!("log_file: {}\n", cfg.log_file));
    output.push_str(&format!("refresh_interval: {} seconds\n", cfg.refresh_interval));
    output.push_str(&format!("time_format: {}\n", cfg.time_format));
    output.push_str("\n[defaults]\n");
    output.push_str(&format!("total_weight_kg: {}\n", cfg.defaults.total_weight_kg));
    output.push_str(&format!("boxes_per_pallet: {}\n", cfg.defaults.boxes_per_pallet));
    output.push_str(&format!("weight_per_box_kg: {}\n", cfg.defaults.weight_per_box_kg));
    output.push_str(&format!("pallet_capacity_kg: {}\n", cfg.defaults.pallet_capacity_kg));
    output.push_str("\n[display]\n");
    output.push_str(&format!("use_unicode: {}\n", cfg.display.use_unicode));
    output.push_str(&format!("selection_fg: {:?}\n", cfg.display.selection_fg));
    output.push_str(&format!(
        "unfocused_selection_fg: {:?}{}\n",
        cfg.display.unfocused_selection_fg(),
        if cfg.display.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    ));
    output.push_str(&format!("header_fg: {:?}\n", cfg.display.header_fg));
    output.push_str(&format!("error_fg: {:?}\n", cfg.display.error_fg));

    output
}

pub fn run(cfg: &Config) {
    print!("{}", format_config(cfg, get_config_path().as_deref()));
}
