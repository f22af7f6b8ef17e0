//! Sentiment Predictor - a small sentiment classification service
//!
//! Text is first checked against a fixed table of override phrases and
//! otherwise scored by a lexicon polarity analyzer. The crate ships the HTTP
//! model service, a CORS gateway in front of it, and a CLI client.

pub mod analyzer;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export core types and traits for easier use
pub use self::core::{
    classifier::{OVERRIDE_PHRASES, SentimentClassifier, match_override},
    data::{PredictRequest, Prediction, SentimentLabel},
    traits::{PolarityAnalyzer, SentimentClient},
};
pub use analyzer::{Lexicon, PatternAnalyzer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_package() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert!(!VERSION.is_empty());
    }
}
