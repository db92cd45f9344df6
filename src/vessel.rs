//! Vessel schedule records
//!
//! One `VesselRecord` per row of the input table, in row order.

mod vessel_record;

pub use vessel_record::VesselRecord;
