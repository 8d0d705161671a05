pub mod detection;
pub mod prediction;

pub use detection::{ConfidenceTier, DetectionRecord, Satellite};
pub use prediction::{PredictionRequest, PredictionResponse, PredictionResult, WeatherSnapshot};
