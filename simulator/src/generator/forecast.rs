use firecore::feed_interface::{PredictionResult, WeatherSnapshot};

/// Deterministic synthetic prediction for a coordinate. The values are an
/// arbitrary smooth function of (lat, lon); the shape and field precision
/// match the real model service.
pub fn build_prediction(lat: f64, lon: f64) -> PredictionResult {
    let heat = ((lat * 0.31).sin() * (lon * 0.17).cos()).abs();
    let dryness = ((lat * 0.09 + lon * 0.05).sin() * 0.5 + 0.5).abs();

    let temp_probability = (100.0 * heat).clamp(0.0, 100.0);
    let veg_probability = (100.0 * dryness).clamp(0.0, 100.0);
    let probability = ((temp_probability + veg_probability) / 2.0).round();

    let weather = WeatherSnapshot {
        temperature: 18.0 + 24.0 * heat,
        humidity: (85.0 - 60.0 * dryness).round(),
        wind_speed: 1.5 + 9.0 * heat * dryness,
        pressure: (1013.0 - 10.0 * heat).round(),
        ndvi: 0.15 + 0.6 * (1.0 - dryness),
        rain_probability: (40.0 * (1.0 - dryness)).round(),
        snow_probability: if lat.abs() > 55.0 { 20.0 } else { 0.0 },
        rain: if dryness < 0.3 { 2.4 } else { 0.0 },
        ffmc: 60.0 + 35.0 * dryness,
        dmc: 10.0 + 90.0 * dryness,
        dc: 80.0 + 420.0 * dryness,
        isi: 1.0 + 14.0 * heat,
        bui: 15.0 + 70.0 * dryness,
        fwi: 2.0 + 30.0 * heat * dryness,
    };

    PredictionResult {
        risk_level: risk_label(probability).to_string(),
        probability,
        temp_probability,
        veg_probability,
        weather,
    }
}

pub fn risk_label(probability: f64) -> &'static str {
    if probability >= 75.0 {
        "Extreme Risk"
    } else if probability >= 50.0 {
        "High Risk"
    } else if probability >= 25.0 {
        "Moderate Risk"
    } else {
        "Low Risk"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_is_deterministic_for_a_coordinate() {
        let first = build_prediction(20.5937, 78.9629);
        let second = build_prediction(20.5937, 78.9629);
        assert_eq!(first.probability, second.probability);
        assert_eq!(first.weather.ffmc, second.weather.ffmc);
    }

    #[test]
    fn probabilities_stay_within_percent_range() {
        for &(lat, lon) in &[(0.0, 0.0), (45.0, -120.0), (-33.8, 151.2), (89.0, 179.0)] {
            let result = build_prediction(lat, lon);
            assert!((0.0..=100.0).contains(&result.probability));
            assert!((0.0..=100.0).contains(&result.temp_probability));
            assert!((0.0..=100.0).contains(&result.veg_probability));
        }
    }

    #[test]
    fn risk_label_tracks_probability_bands() {
        assert_eq!(risk_label(10.0), "Low Risk");
        assert_eq!(risk_label(25.0), "Moderate Risk");
        assert_eq!(risk_label(60.0), "High Risk");
        assert_eq!(risk_label(90.0), "Extreme Risk");
    }

    #[test]
    fn risk_level_matches_probability_band() {
        let result = build_prediction(12.0, 77.0);
        assert_eq!(result.risk_level, risk_label(result.probability));
    }
}
