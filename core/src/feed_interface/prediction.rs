use serde::{Deserialize, Serialize};

/// Body of the `POST /predict` request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub lat: f64,
    pub lon: f64,
}

/// Weather and fire-weather-index snapshot accompanying a prediction.
/// The FWI components are opaque to this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub pressure: f64,
    pub ndvi: f64,
    pub rain_probability: f64,
    pub snow_probability: f64,
    pub rain: f64,
    pub ffmc: f64,
    pub dmc: f64,
    pub dc: f64,
    pub isi: f64,
    pub bui: f64,
    pub fwi: f64,
}

/// Successful prediction payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub risk_level: String,
    pub probability: f64,
    pub temp_probability: f64,
    pub veg_probability: f64,
    pub weather: WeatherSnapshot,
}

impl PredictionResult {
    /// Style class derived from the risk label, e.g. "High Risk" -> "high-risk".
    pub fn risk_class(&self) -> String {
        self.risk_level.to_lowercase().replace(' ', "-")
    }
}

/// The endpoint answers either a result or an application-level error
/// object, both with a success status.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PredictionResponse {
    Failure { error: String },
    Success(PredictionResult),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success_body() -> &'static str {
        r#"{
            "risk_level": "High Risk",
            "probability": 82.5,
            "temp_probability": 74.0,
            "veg_probability": 61.0,
            "weather": {
                "temperature": 34.2,
                "humidity": 21.0,
                "wind_speed": 6.4,
                "pressure": 1008.0,
                "ndvi": 0.42,
                "rain_probability": 5.0,
                "snow_probability": 0.0,
                "rain": 0.0,
                "ffmc": 88.1,
                "dmc": 42.7,
                "dc": 310.4,
                "isi": 9.8,
                "bui": 55.2,
                "fwi": 21.3
            }
        }"#
    }

    #[test]
    fn response_decodes_success_variant() {
        let response: PredictionResponse = serde_json::from_str(success_body()).unwrap();
        match response {
            PredictionResponse::Success(result) => {
                assert_eq!(result.risk_level, "High Risk");
                assert_eq!(result.weather.fwi, 21.3);
            }
            PredictionResponse::Failure { .. } => panic!("expected success"),
        }
    }

    #[test]
    fn response_decodes_error_variant() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"error": "model unavailable"}"#).unwrap();
        match response {
            PredictionResponse::Failure { error } => assert_eq!(error, "model unavailable"),
            PredictionResponse::Success(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn risk_class_lowercases_and_hyphenates() {
        let result: PredictionResponse = serde_json::from_str(success_body()).unwrap();
        let PredictionResponse::Success(result) = result else {
            panic!("expected success");
        };
        assert_eq!(result.risk_class(), "high-risk");
    }

    #[test]
    fn request_serializes_lat_lon_fields() {
        let body = serde_json::to_value(PredictionRequest {
            lat: 20.5937,
            lon: 78.9629,
        })
        .unwrap();
        assert_eq!(body["lat"], 20.5937);
        assert_eq!(body["lon"], 78.9629);
    }
}
