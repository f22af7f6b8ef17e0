//! Core business logic layer
//!
//! This module contains the data structures, traits and the two-tier
//! classifier that form the heart of the service.

pub mod classifier;
pub mod data;
pub mod traits;

pub use classifier::{OVERRIDE_PHRASES, OverridePhrase, SentimentClassifier, match_override};
pub use data::{ClassificationSource, PredictRequest, Prediction, SentimentLabel};
pub use traits::{PolarityAnalyzer, SentimentClient};
