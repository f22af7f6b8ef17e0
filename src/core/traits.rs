//! Core trait definitions for sentiment classification
//!
//! These traits sit at the two seams of the system: the polarity analyzer the
//! classifier falls back on, and the client that turns text into a prediction
//! either in-process or over HTTP.

use crate::core::data::Prediction;
use crate::utils::error::AppResult;
use async_trait::async_trait;

/// Lexical polarity scoring
///
/// Implementations return a score in `[-1.0, 1.0]` and must be safe to share
/// across request handlers.
pub trait PolarityAnalyzer: Send + Sync {
    /// Compute the polarity of a piece of text
    fn polarity(&self, text: &str) -> f64;
}

/// Anything that can turn text into a prediction
#[async_trait]
pub trait SentimentClient: Send + Sync {
    /// Classify a single piece of text
    async fn predict(&self, text: &str) -> AppResult<Prediction>;
}
