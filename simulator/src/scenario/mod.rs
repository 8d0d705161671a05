pub mod config;

pub use config::ScenarioConfig;
