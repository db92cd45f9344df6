// Configuration module for berthplot
// This module handles loading and parsing configuration from ~/.config/berthplot/config.toml

mod types;

pub use types::{ChartConfig, ColumnsConfig, Config};

use std::fs;
use std::path::PathBuf;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/berthplot/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    let config_path = get_config_path();

    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(&config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    parse_config(&contents)
}

/// Parse config file contents, falling back to defaults with a warning
pub fn parse_config(contents: &str) -> ConfigResult {
    match toml::from_str::<Config>(contents) {
        Ok(mut config) => {
            if let Some(reason) = config.chart.invalid_reason() {
                log::error!("Invalid chart config: {}", reason);
                config.chart = ChartConfig::default();
                return ConfigResult {
                    config,
                    warning: Some(format!("Invalid config: {}", reason)),
                };
            }

            log::debug!("Config parsed successfully: {:?}", config.chart);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            log::error!("Failed to parse config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/berthplot/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("berthplot")
        .join("config.toml")
}
