//! Lexicon polarity scoring
//!
//! Every known word in the text becomes an assessment. Modifiers such as
//! "very" fold into the next known word, negations halve and flip it, and
//! exclamation marks amplify it. The polarity of the text is the mean of its
//! assessments.

use super::lexicon::Lexicon;
use crate::core::traits::PolarityAnalyzer;
use regex::Regex;
use std::sync::LazyLock;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[:;=]['-]?(?:[()\[\]]|[dp]\b)|[a-z0-9]+(?:'[a-z]+)?|!")
        .expect("token pattern is valid")
});

const NEGATION_FACTOR: f64 = -0.5;
const EXCLAMATION_BOOST: f64 = 1.25;

#[derive(Debug, Clone, Copy)]
struct Assessment {
    polarity: f64,
    intensity: f64,
    negated: bool,
}

impl Assessment {
    fn score(&self) -> f64 {
        if self.negated {
            self.polarity * NEGATION_FACTOR
        } else {
            self.polarity
        }
    }
}

fn clamp(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

pub struct PatternAnalyzer {
    lexicon: Lexicon,
}

impl Default for PatternAnalyzer {
    fn default() -> Self {
        Self::new(Lexicon::builtin().expect("built-in lexicon is valid"))
    }
}

impl PatternAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    fn assess(&self, text: &str) -> Vec<Assessment> {
        let lowered = text.to_lowercase();
        let mut assessments: Vec<Assessment> = Vec::new();
        let mut modifier_pending = false;
        let mut negation_pending = false;

        for token in TOKEN_RE.find_iter(&lowered).map(|m| m.as_str()) {
            if let Some(entry) = self.lexicon.word(token) {
                if modifier_pending && let Some(last) = assessments.last_mut() {
                    last.polarity = clamp(entry.polarity * last.intensity);
                    last.intensity = entry.intensity;
                } else {
                    assessments.push(Assessment {
                        polarity: entry.polarity,
                        intensity: entry.intensity,
                        negated: false,
                    });
                }
                if negation_pending && let Some(last) = assessments.last_mut() {
                    // A negated modifier weakens the word it modifies: "not very good"
                    last.negated = true;
                    last.intensity = 1.0 / if last.intensity == 0.0 { 1.0 } else { last.intensity };
                }
                modifier_pending = entry.modifier;
                negation_pending = self.lexicon.is_negation(token);
                continue;
            }

            if self.lexicon.is_negation(token) {
                negation_pending = true;
            } else if negation_pending && token.trim_matches('\'').len() > 1 {
                // Negation carries over one-letter words: "not a good"
                negation_pending = false;
            }

            if negation_pending && modifier_pending {
                // "really not good" negates the modifier's assessment
                if let Some(last) = assessments.last_mut() {
                    last.negated = true;
                }
                negation_pending = false;
            } else if modifier_pending && token.len() > 2 {
                modifier_pending = false;
            }

            if token == "!" {
                if let Some(last) = assessments.last_mut() {
                    last.polarity = clamp(last.polarity * EXCLAMATION_BOOST);
                }
                continue;
            }

            if let Some(polarity) = self.lexicon.emoticon(token) {
                assessments.push(Assessment {
                    polarity,
                    intensity: 1.0,
                    negated: false,
                });
            }
        }

        assessments
    }
}

impl PolarityAnalyzer for PatternAnalyzer {
    fn polarity(&self, text: &str) -> f64 {
        let assessments = self.assess(text);
        if assessments.is_empty() {
            return 0.0;
        }
        let total: f64 = assessments.iter().map(Assessment::score).sum();
        clamp(total / assessments.len() as f64)
    }
}
