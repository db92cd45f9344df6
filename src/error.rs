use thiserror::Error;

#[derive(Debug, Error)]
pub enum BerthPlotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported table format '{0}' (expected .csv, .json or .xlsx)")]
    UnsupportedFormat(String),

    #[error("Invalid vessel table: {0}")]
    InvalidTable(String),

    #[error("Missing column '{0}' in vessel table")]
    MissingColumn(String),

    #[error("Row {row}: no value for column '{column}'")]
    MissingCell { row: usize, column: String },

    #[error("Row {row}: column '{column}' is not a number: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A vessel record that cannot be drawn
///
/// Vessel numbers are 1-based, matching the chart labels.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("vessel {vessel}: length must be positive, got {length}")]
    NonPositiveLength { vessel: usize, length: f64 },

    #[error(
        "vessel {vessel}: departure time {departure_time} is before berth time {berth_time}"
    )]
    DepartureBeforeBerth {
        vessel: usize,
        berth_time: f64,
        departure_time: f64,
    },

    #[error("vessel {vessel}: {field} is not a finite number")]
    NonFinite { vessel: usize, field: &'static str },

    #[error("vessel {vessel}: position or size is too large to draw")]
    OutOfRange { vessel: usize },
}
