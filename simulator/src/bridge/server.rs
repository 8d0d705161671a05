use crate::generator::batch::build_detection_batch;
use crate::generator::forecast::build_prediction;
use crate::scenario::ScenarioConfig;
use chrono::Utc;
use firecore::feed_interface::{DetectionRecord, PredictionRequest};
use firecore::geo::Coordinate;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, RwLock,
    },
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn bind_address(port: u16) -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], port))
}

#[derive(Debug)]
struct WarpError;

impl warp::reject::Reject for WarpError {}

/// Response body for `/get_fire_data`: a fresh synthetic batch. The seed
/// rotates per request so successive polls see the feed move.
pub fn fire_data_reply(
    config: &ScenarioConfig,
    seed: u64,
) -> anyhow::Result<Vec<DetectionRecord>> {
    build_detection_batch(config, seed, Utc::now())
}

/// Response body for `/predict`. Out-of-range coordinates map to the
/// application-level `{error}` shape with a success status.
pub fn predict_reply(request: PredictionRequest) -> serde_json::Value {
    match Coordinate::new(request.lat, request.lon) {
        Ok(coord) => match serde_json::to_value(build_prediction(coord.lat, coord.lon)) {
            Ok(body) => body,
            Err(err) => json!({ "error": format!("encoding prediction: {err}") }),
        },
        Err(err) => json!({ "error": err.to_string() }),
    }
}

/// Bridge hosting the two dashboard endpoints and keeping the last served
/// batch available for inspection.
pub struct FeedBridge {
    state: Arc<RwLock<Vec<DetectionRecord>>>,
}

impl FeedBridge {
    pub fn new(config: ScenarioConfig, port: u16) -> Self {
        let state = Arc::new(RwLock::new(Vec::new()));
        let request_counter = Arc::new(AtomicU64::new(0));

        let state_for_filter = state.clone();
        let fire_data_route = warp::path("get_fire_data")
            .and(warp::get())
            .and_then(move || {
                let config = config.clone();
                let state = state_for_filter.clone();
                let counter = request_counter.clone();
                async move {
                    let seed = config.seed + counter.fetch_add(1, Ordering::Relaxed);
                    match fire_data_reply(&config, seed) {
                        Ok(batch) => {
                            if let Ok(mut guard) = state.write() {
                                *guard = batch.clone();
                            }
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&batch),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            log::error!("get_fire_data error: {err}");
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                }
            });

        let predict_route = warp::path("predict")
            .and(warp::post())
            .and(warp::body::json())
            .map(|request: PredictionRequest| {
                warp::reply::with_status(
                    warp::reply::json(&predict_reply(request)),
                    StatusCode::OK,
                )
            });

        thread::spawn(move || {
            let routes = fire_data_route.or(predict_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(bind_address(port)).await;
            });
        });

        Self { state }
    }

    /// The batch most recently served to a client.
    pub fn last_batch(&self) -> Vec<DetectionRecord> {
        self.state.read().map(|b| b.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_reply_returns_full_payload_for_valid_coordinates() {
        let body = predict_reply(PredictionRequest {
            lat: 20.5937,
            lon: 78.9629,
        });
        assert!(body.get("error").is_none());
        assert!(body["risk_level"].is_string());
        assert!(body["weather"]["fwi"].is_number());
    }

    #[test]
    fn predict_reply_maps_invalid_coordinates_to_error_field() {
        let body = predict_reply(PredictionRequest {
            lat: 120.0,
            lon: 10.0,
        });
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("latitude"));
    }

    #[test]
    fn fire_data_reply_respects_scenario_count() {
        let config = ScenarioConfig::from_args(17, 5);
        let batch = fire_data_reply(&config, 5).unwrap();
        assert_eq!(batch.len(), 17);
    }

    #[test]
    fn rotating_seed_changes_the_batch() {
        let config = ScenarioConfig::from_args(8, 0);
        let first = fire_data_reply(&config, 0).unwrap();
        let second = fire_data_reply(&config, 1).unwrap();
        let moved = first
            .iter()
            .zip(second.iter())
            .any(|(a, b)| a.latitude != b.latitude);
        assert!(moved);
    }
}
