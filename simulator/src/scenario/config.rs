use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Region and batch parameters for the synthetic feed.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub detection_count: usize,
    pub seed: u64,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
    /// Oldest acquisition age generated, in hours before "now".
    pub max_age_hours: i64,
    pub name: Option<String>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        // Roughly the Indian subcontinent, matching the dashboard's home view.
        Self {
            detection_count: 60,
            seed: 0,
            lat_min: 6.0,
            lat_max: 36.0,
            lon_min: 68.0,
            lon_max: 98.0,
            max_age_hours: 72,
            name: None,
        }
    }
}

impl ScenarioConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading scenario config {}", path_ref.display()))?;
        let config: ScenarioConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing scenario config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(detection_count: usize, seed: u64) -> Self {
        Self {
            detection_count,
            seed,
            ..Default::default()
        }
    }
}
