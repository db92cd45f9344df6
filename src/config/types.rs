// Configuration type definitions

use serde::Deserialize;

use crate::chart::ChartScale;

/// Chart scaling section
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_scale")]
    pub width_scale: f64,
    #[serde(default = "default_scale")]
    pub height_scale: f64,
}

fn default_scale() -> f64 {
    0.8
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            width_scale: default_scale(),
            height_scale: default_scale(),
        }
    }
}

impl ChartConfig {
    pub fn scale(&self) -> ChartScale {
        ChartScale::new(self.width_scale, self.height_scale)
    }

    /// Returns a description of the first invalid value, if any
    pub fn invalid_reason(&self) -> Option<String> {
        for (name, value) in [
            ("width_scale", self.width_scale),
            ("height_scale", self.height_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Some(format!("chart.{} must be a positive number, got {}", name, value));
            }
        }
        None
    }
}

/// Input table column names
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnsConfig {
    #[serde(default = "default_length_column")]
    pub length: String,
    #[serde(default = "default_berth_time_column")]
    pub berth_time: String,
    #[serde(default = "default_departure_time_column")]
    pub departure_time: String,
}

fn default_length_column() -> String {
    "length_of_vessel".to_string()
}

fn default_berth_time_column() -> String {
    "time_of_arrival_at_port".to_string()
}

// The vessel spreadsheet stores the end of berth occupancy in this column
fn default_departure_time_column() -> String {
    "cargo_dead_weight".to_string()
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        ColumnsConfig {
            length: default_length_column(),
            berth_time: default_berth_time_column(),
            departure_time: default_departure_time_column(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub columns: ColumnsConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
