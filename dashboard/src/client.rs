use firecore::feed_interface::{
    DetectionRecord, PredictionRequest, PredictionResponse, PredictionResult,
};
use std::time::Duration;

/// HTTP client for the two backend endpoints. Every request carries an
/// explicit timeout so a hung call surfaces as a transport error instead
/// of leaving the UI loading forever.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    pub async fn fetch_fire_data(&self) -> Result<Vec<DetectionRecord>, String> {
        let response = self
            .http
            .get(format!("{}/get_fire_data", self.base_url))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("HTTP error! status: {}", response.status()));
        }
        response
            .json::<Vec<DetectionRecord>>()
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn predict(&self, request: PredictionRequest) -> Result<PredictionResult, String> {
        let response = self
            .http
            .post(format!("{}/predict", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("HTTP error! status: {}", response.status()));
        }
        match response
            .json::<PredictionResponse>()
            .await
            .map_err(|e| e.to_string())?
        {
            PredictionResponse::Success(result) => Ok(result),
            PredictionResponse::Failure { error } => Err(error),
        }
    }
}
