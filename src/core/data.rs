//! Core data structures for sentiment classification
//!
//! These are the request and response bodies exchanged over HTTP and the
//! label enum both classification paths map their scores onto.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of a `POST /predict` request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

/// Coarse sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "Very Negative")]
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    #[serde(rename = "Very Positive")]
    VeryPositive,
}

impl SentimentLabel {
    /// Label for a score taken from the override table.
    ///
    /// Breakpoints sit at -0.5 and +0.5; there is no neutral band.
    pub fn from_override_score(score: f64) -> Self {
        if score < -0.5 {
            SentimentLabel::VeryNegative
        } else if score > 0.5 {
            SentimentLabel::VeryPositive
        } else if score < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Positive
        }
    }

    /// Label for a polarity produced by the lexicon analyzer.
    ///
    /// Breakpoints sit at -0.1 and +0.1 and there is no "Very" tier. This
    /// differs from [`SentimentLabel::from_override_score`] on purpose.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.1 {
            SentimentLabel::Positive
        } else if polarity < -0.1 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::VeryNegative => "Very Negative",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Positive => "Positive",
            SentimentLabel::VeryPositive => "Very Positive",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a `POST /predict` response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub sentiment: SentimentLabel,
    pub score: f64,
}

/// Which tier of the classifier produced a prediction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClassificationSource {
    Override(&'static str),
    Analyzer,
}
