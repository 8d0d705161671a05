use crate::prelude::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Validated geographic coordinate selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> DomainResult<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::OutOfRange(format!(
                "latitude {lat} outside [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::OutOfRange(format!(
                "longitude {lon} outside [-180, 180]"
            )));
        }
        Ok(Self { lat, lon })
    }

    /// Values for the two coordinate input fields, 6 decimal places.
    pub fn field_values(&self) -> (String, String) {
        (format!("{:.6}", self.lat), format!("{:.6}", self.lon))
    }

    /// Human-readable caption shown under the map, 4 decimal places.
    pub fn caption(&self) -> String {
        format!("{:.4}°N, {:.4}°E", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_accepts_full_valid_range() {
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn coordinate_rejects_out_of_range_values() {
        assert!(Coordinate::new(90.1, 0.0).is_err());
        assert!(Coordinate::new(-91.0, 0.0).is_err());
        assert!(Coordinate::new(0.0, 180.5).is_err());
        assert!(Coordinate::new(0.0, -200.0).is_err());
    }

    #[test]
    fn field_values_round_to_six_decimals() {
        let coord = Coordinate::new(20.59371234999, 78.96289876111).unwrap();
        let (lat, lon) = coord.field_values();
        assert_eq!(lat, "20.593712");
        assert_eq!(lon, "78.962899");
    }

    #[test]
    fn caption_uses_four_decimals() {
        let coord = Coordinate::new(20.5937, 78.9629).unwrap();
        assert_eq!(coord.caption(), "20.5937°N, 78.9629°E");
    }
}
