//! Browser-facing proxy in front of the model service
//!
//! `POST /api/predict` forwards its JSON body to `{model_url}/predict` and
//! relays the reply. Any upstream failure becomes a fixed 500 body so the
//! browser never sees upstream details.

use super::cors::{self, CorsPolicy};
use super::log_requests;
use crate::config::GatewayConfig;
use crate::utils::error::{AppError, AppResult};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::post,
};
use reqwest::Client;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct GatewayState {
    client: Client,
    predict_url: String,
}

impl GatewayState {
    pub fn new(model_url: &str) -> AppResult<Self> {
        Ok(Self {
            client: Client::builder()
                .user_agent(format!("sentiment-predictor/{}", crate::VERSION))
                .timeout(UPSTREAM_TIMEOUT)
                .build()
                .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?,
            predict_url: format!("{}/predict", model_url.trim_end_matches('/')),
        })
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }
}

/// Upstream call failed; the cause is logged, not returned
#[derive(Debug)]
pub struct ModelRequestFailed(AppError);

impl IntoResponse for ModelRequestFailed {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Error calling ML model");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "ML model request failed" })),
        )
            .into_response()
    }
}

pub fn router(state: GatewayState, policy: CorsPolicy) -> Router {
    Router::new()
        .route("/api/predict", post(forward_predict))
        .layer(middleware::from_fn_with_state(Arc::new(policy), cors::apply))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn forward_predict(
    State(state): State<GatewayState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ModelRequestFailed> {
    let response = state
        .client
        .post(&state.predict_url)
        .json(&body)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| ModelRequestFailed(AppError::Network(e.to_string())))?;

    let payload = response
        .json::<Value>()
        .await
        .map_err(|e| ModelRequestFailed(AppError::Network(format!("Invalid model response: {}", e))))?;

    Ok(Json(payload))
}

/// Run the gateway until Ctrl-C
pub async fn serve(config: &GatewayConfig) -> AppResult<()> {
    let state = GatewayState::new(&config.model_url)?;
    tracing::info!(upstream = state.predict_url(), "forwarding predictions");

    let policy = CorsPolicy::new(config.allowed_origins.clone());
    let listener = super::bind(&config.host, config.port).await?;
    super::run(listener, router(state, policy), "gateway").await
}
