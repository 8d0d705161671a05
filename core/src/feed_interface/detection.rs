use crate::prelude::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Satellite source of a detection; higher-resolution sources get larger
/// markers on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Satellite {
    Landsat,
    Viirs,
    Modis,
}

impl Satellite {
    pub const ALL: [Satellite; 3] = [Satellite::Landsat, Satellite::Viirs, Satellite::Modis];

    /// Case-insensitive parse matching the feed's mixed-case labels.
    pub fn parse(value: &str) -> DomainResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "landsat" => Ok(Satellite::Landsat),
            "viirs" => Ok(Satellite::Viirs),
            "modis" => Ok(Satellite::Modis),
            other => Err(DomainError::Malformed(format!(
                "unknown satellite '{other}'"
            ))),
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            Satellite::Landsat => "landsat",
            Satellite::Viirs => "viirs",
            Satellite::Modis => "modis",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Satellite::Landsat => "Landsat",
            Satellite::Viirs => "VIIRS",
            Satellite::Modis => "MODIS",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Satellite::Landsat => 0,
            Satellite::Viirs => 1,
            Satellite::Modis => 2,
        }
    }
}

impl Serialize for Satellite {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for Satellite {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Satellite::parse(&raw).map_err(de::Error::custom)
    }
}

/// Detection-quality label attached to each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceTier {
    High,
    Nominal,
    Low,
}

impl ConfidenceTier {
    pub const ALL: [ConfidenceTier; 3] = [
        ConfidenceTier::High,
        ConfidenceTier::Nominal,
        ConfidenceTier::Low,
    ];

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "high" => Ok(ConfidenceTier::High),
            "nominal" => Ok(ConfidenceTier::Nominal),
            "low" => Ok(ConfidenceTier::Low),
            other => Err(DomainError::Malformed(format!(
                "unknown confidence tier '{other}'"
            ))),
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Nominal => "nominal",
            ConfidenceTier::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "High",
            ConfidenceTier::Nominal => "Nominal",
            ConfidenceTier::Low => "Low",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ConfidenceTier::High => 0,
            ConfidenceTier::Nominal => 1,
            ConfidenceTier::Low => 2,
        }
    }
}

impl Serialize for ConfidenceTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for ConfidenceTier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ConfidenceTier::parse(&raw).map_err(de::Error::custom)
    }
}

/// One fire detection as delivered by the feed endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub satellite: Satellite,
    pub confidence: ConfidenceTier,
    pub latitude: f64,
    pub longitude: f64,
    pub acq_date: DateTime<Utc>,
    pub brightness: f64,
    pub frp: f64,
}

impl DetectionRecord {
    /// Lines for the marker info popup, formatted like the legacy panel.
    pub fn popup_lines(&self) -> Vec<String> {
        vec![
            format!("Satellite: {}", self.satellite.label()),
            format!("Confidence: {}", self.confidence.label()),
            format!("Detected: {}", self.acq_date.format("%Y-%m-%d %H:%M UTC")),
            format!("Brightness: {:.2}K", self.brightness),
            format!("FRP: {:.2} MW", self.frp),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn satellite_parse_is_case_insensitive() {
        assert_eq!(Satellite::parse("VIIRS").unwrap(), Satellite::Viirs);
        assert_eq!(Satellite::parse("Landsat").unwrap(), Satellite::Landsat);
        assert!(Satellite::parse("sentinel").is_err());
    }

    #[test]
    fn confidence_parse_is_case_insensitive() {
        assert_eq!(ConfidenceTier::parse("HIGH").unwrap(), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::parse("low").unwrap(), ConfidenceTier::Low);
        assert!(ConfidenceTier::parse("maybe").is_err());
    }

    #[test]
    fn detection_record_decodes_wire_shape() {
        let raw = r#"{
            "satellite": "VIIRS",
            "confidence": "nominal",
            "latitude": 21.5,
            "longitude": 79.1,
            "acq_date": "2026-08-20T10:30:00Z",
            "brightness": 330.25,
            "frp": 12.5
        }"#;
        let record: DetectionRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.satellite, Satellite::Viirs);
        assert_eq!(record.confidence, ConfidenceTier::Nominal);
        assert_eq!(
            record.acq_date,
            Utc.with_ymd_and_hms(2026, 8, 20, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn popup_lines_format_intensity_fields() {
        let record = DetectionRecord {
            satellite: Satellite::Modis,
            confidence: ConfidenceTier::High,
            latitude: 20.0,
            longitude: 78.0,
            acq_date: Utc.with_ymd_and_hms(2026, 8, 20, 10, 30, 0).unwrap(),
            brightness: 345.678,
            frp: 9.1,
        };
        let lines = record.popup_lines();
        assert!(lines.contains(&"Brightness: 345.68K".to_string()));
        assert!(lines.contains(&"FRP: 9.10 MW".to_string()));
    }
}
