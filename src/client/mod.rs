//! Prediction clients
//!
//! [`LocalClient`] runs the classifier in-process. [`RemoteClient`] posts to a
//! running model service or gateway.

pub mod input;

use crate::core::{PredictRequest, Prediction, SentimentClassifier, SentimentClient};
use crate::utils::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct LocalClient {
    classifier: SentimentClassifier,
}

impl LocalClient {
    pub fn new(classifier: SentimentClassifier) -> Self {
        Self { classifier }
    }
}

#[async_trait]
impl SentimentClient for LocalClient {
    async fn predict(&self, text: &str) -> AppResult<Prediction> {
        Ok(self.classifier.classify(text))
    }
}

pub struct RemoteClient {
    client: Client,
    endpoint: String,
}

impl RemoteClient {
    /// `endpoint` is the full URL of a predict route, e.g.
    /// `http://127.0.0.1:8000/predict` or `http://localhost:3001/api/predict`
    pub fn new(endpoint: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            client: Client::builder()
                .user_agent(format!("sentiment-predictor/{}", crate::VERSION))
                .timeout(REQUEST_TIMEOUT)
                .build()
                .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SentimentClient for RemoteClient {
    async fn predict(&self, text: &str) -> AppResult<Prediction> {
        tracing::debug!(endpoint = %self.endpoint, chars = text.chars().count(), "sending prediction request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&PredictRequest {
                text: text.to_string(),
            })
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to reach {}: {}", self.endpoint, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Network(format!("Server error: {}", status.as_u16())));
        }

        response
            .json::<Prediction>()
            .await
            .map_err(|e| AppError::Network(format!("Invalid response from {}: {}", self.endpoint, e)))
    }
}
