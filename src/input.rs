//! Vessel table input
//!
//! The table is read once at startup, before the terminal is initialised.

mod table_reader;

pub use table_reader::{TableFormat, TableReader};
