use crate::scenario::ScenarioConfig;
use anyhow::ensure;
use chrono::{DateTime, Duration, Utc};
use firecore::feed_interface::{ConfidenceTier, DetectionRecord, Satellite};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Builds a synthetic detection batch for the configured region. The same
/// (config, seed, now) always yields the same batch so scenarios replay
/// consistently.
pub fn build_detection_batch(
    config: &ScenarioConfig,
    seed: u64,
    now: DateTime<Utc>,
) -> anyhow::Result<Vec<DetectionRecord>> {
    ensure!(
        config.lat_min < config.lat_max && config.lon_min < config.lon_max,
        "scenario region is empty: lat [{}, {}], lon [{}, {}]",
        config.lat_min,
        config.lat_max,
        config.lon_min,
        config.lon_max
    );
    ensure!(config.max_age_hours > 0, "max_age_hours must be positive");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(config.detection_count);

    for _ in 0..config.detection_count {
        let satellite = Satellite::ALL[rng.gen_range(0..Satellite::ALL.len())];
        let confidence = ConfidenceTier::ALL[rng.gen_range(0..ConfidenceTier::ALL.len())];
        let age_minutes = rng.gen_range(0..config.max_age_hours * 60);

        records.push(DetectionRecord {
            satellite,
            confidence,
            latitude: rng.gen_range(config.lat_min..config.lat_max),
            longitude: rng.gen_range(config.lon_min..config.lon_max),
            acq_date: now - Duration::minutes(age_minutes),
            brightness: rng.gen_range(300.0..500.0),
            frp: rng.gen_range(2.0..150.0),
        });
    }

    Ok(records)
}
