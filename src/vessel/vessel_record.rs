use crate::error::ValidationError;

/// A single vessel's berth occupancy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VesselRecord {
    /// Row position in the input table (0-based)
    pub index: usize,
    /// Vessel length in meters
    pub length: f64,
    /// Start of berth occupancy in minutes
    pub berth_time: f64,
    /// End of berth occupancy in minutes
    pub departure_time: f64,
}

impl VesselRecord {
    pub fn new(index: usize, length: f64, berth_time: f64, departure_time: f64) -> Self {
        Self {
            index,
            length,
            berth_time,
            departure_time,
        }
    }

    /// Number shown on the chart label
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Time the vessel occupies the berth
    pub fn duration(&self) -> f64 {
        self.departure_time - self.berth_time
    }

    /// Check that the record describes a drawable rectangle
    pub fn validate(&self) -> Result<(), ValidationError> {
        let vessel = self.number();

        for (field, value) in [
            ("length", self.length),
            ("berth time", self.berth_time),
            ("departure time", self.departure_time),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { vessel, field });
            }
        }

        if self.length <= 0.0 {
            return Err(ValidationError::NonPositiveLength {
                vessel,
                length: self.length,
            });
        }

        if self.departure_time < self.berth_time {
            return Err(ValidationError::DepartureBeforeBerth {
                vessel,
                berth_time: self.berth_time,
                departure_time: self.departure_time,
            });
        }

        if !self.duration().is_finite() {
            return Err(ValidationError::NonFinite {
                vessel,
                field: "duration",
            });
        }

        Ok(())
    }
}
