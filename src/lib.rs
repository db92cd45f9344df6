//! berthplot library - berth allocation chart for vessel schedules
//!
//! This library exposes the core functionality of berthplot for testing purposes.

pub mod app;
pub mod chart;
pub mod config;
pub mod error;
pub mod help;
pub mod input;
pub mod layout;
pub mod notification;
pub mod report;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod vessel;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
