//! Two-tier sentiment classifier
//!
//! A fixed table of literal phrases is consulted first; anything it does not
//! cover is scored by a [`PolarityAnalyzer`].

use crate::analyzer::PatternAnalyzer;
use crate::core::data::{ClassificationSource, Prediction, SentimentLabel};
use crate::core::traits::PolarityAnalyzer;

/// A literal phrase with a hardcoded score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverridePhrase {
    pub phrase: &'static str,
    pub score: f64,
}

const fn phrase(phrase: &'static str, score: f64) -> OverridePhrase {
    OverridePhrase { phrase, score }
}

/// Override phrases in match order. The first phrase contained in the
/// normalized input wins, so "hate you" shadows "i hate" for "I hate you".
pub static OVERRIDE_PHRASES: [OverridePhrase; 9] = [
    phrase("hate you", -0.90),
    phrase("i hate", -0.85),
    phrase("terrible", -0.80),
    phrase("awful", -0.75),
    phrase("love you", 0.95),
    phrase("i love", 0.90),
    phrase("amazing", 0.85),
    phrase("wonderful", 0.80),
    phrase("excellent", 0.75),
];

/// Find the first override phrase contained in `text`, ignoring case and
/// surrounding whitespace
pub fn match_override(text: &str) -> Option<&'static OverridePhrase> {
    let normalized = text.trim().to_lowercase();
    OVERRIDE_PHRASES
        .iter()
        .find(|entry| normalized.contains(entry.phrase))
}

pub struct SentimentClassifier<A = PatternAnalyzer> {
    analyzer: A,
}

impl Default for SentimentClassifier<PatternAnalyzer> {
    fn default() -> Self {
        Self::new(PatternAnalyzer::default())
    }
}

impl<A: PolarityAnalyzer> SentimentClassifier<A> {
    pub fn new(analyzer: A) -> Self {
        Self { analyzer }
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    pub fn classify(&self, text: &str) -> Prediction {
        self.classify_with_source(text).0
    }

    /// Classify `text` and report which tier produced the result
    pub fn classify_with_source(&self, text: &str) -> (Prediction, ClassificationSource) {
        if let Some(entry) = match_override(text) {
            tracing::debug!(phrase = entry.phrase, score = entry.score, "override phrase matched");
            let prediction = Prediction {
                sentiment: SentimentLabel::from_override_score(entry.score),
                score: entry.score,
            };
            return (prediction, ClassificationSource::Override(entry.phrase));
        }

        // The analyzer sees the caller's text as-is, not the normalized form
        let polarity = self.analyzer.polarity(text);
        tracing::debug!(polarity, "no override phrase, using analyzer polarity");
        let prediction = Prediction {
            sentiment: SentimentLabel::from_polarity(polarity),
            score: polarity,
        };
        (prediction, ClassificationSource::Analyzer)
    }
}
