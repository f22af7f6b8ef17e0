//! HTTP surfaces: the model service and the CORS gateway in front of it

pub mod cors;
pub mod gateway;

use crate::analyzer::{Lexicon, PatternAnalyzer};
use crate::config::ServerConfig;
use crate::core::{PredictRequest, Prediction, SentimentClassifier};
use crate::utils::error::{AppError, AppResult};
use axum::{
    Json, Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::post,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;

pub type SharedClassifier = Arc<SentimentClassifier>;

/// Router for the model service: a single `POST /predict` route
pub fn router(classifier: SharedClassifier) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .layer(middleware::from_fn(log_requests))
        .with_state(classifier)
}

async fn predict(
    State(classifier): State<SharedClassifier>,
    Json(request): Json<PredictRequest>,
) -> Json<Prediction> {
    Json(classifier.classify(&request.text))
}

/// Build the classifier, loading a replacement lexicon when one is configured
pub fn build_classifier(config: &ServerConfig) -> AppResult<SentimentClassifier> {
    let lexicon = match &config.lexicon {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading lexicon");
            Lexicon::load(path)?
        }
        None => Lexicon::builtin()?,
    };
    tracing::debug!(words = lexicon.len(), "lexicon ready");
    Ok(SentimentClassifier::new(PatternAnalyzer::new(lexicon)))
}

/// Run the model service until Ctrl-C
pub async fn serve(config: &ServerConfig) -> AppResult<()> {
    let classifier = Arc::new(build_classifier(config)?);
    let listener = bind(&config.host, config.port).await?;
    run(listener, router(classifier), "model service").await
}

pub async fn bind(host: &str, port: u16) -> AppResult<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .map_err(|e| AppError::Network(format!("Failed to bind {}:{}: {}", host, port, e)))
}

pub async fn run(listener: TcpListener, router: Router, name: &str) -> AppResult<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "{} listening", name);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Network(format!("{} stopped: {}", name, e)))?;

    tracing::info!("{} stopped", name);
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

/// Log method, path, status and latency of every request
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    if response.status().is_server_error() {
        tracing::warn!(%method, %path, status, elapsed_ms, "request failed");
    } else {
        tracing::info!(%method, %path, status, elapsed_ms, "request handled");
    }

    response
}
