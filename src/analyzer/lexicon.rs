//! Word polarity lexicon
//!
//! The lexicon is stored as TOML. A copy ships inside the binary and a
//! replacement can be loaded from disk through `server.lexicon`.

use crate::utils::error::{AppError, AppResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const BUILTIN_LEXICON: &str = include_str!("../../data/lexicon.toml");

fn default_intensity() -> f64 {
    1.0
}

/// Scoring data for one lexicon word
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WordEntry {
    pub polarity: f64,
    #[serde(default = "default_intensity")]
    pub intensity: f64,
    /// Whether the word scales the polarity of the next known word
    #[serde(default)]
    pub modifier: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Lexicon {
    #[serde(default)]
    negations: Vec<String>,
    #[serde(default)]
    emoticons: HashMap<String, f64>,
    words: HashMap<String, WordEntry>,
}

impl Lexicon {
    /// The lexicon embedded at compile time
    pub fn builtin() -> AppResult<Self> {
        Self::from_toml_str(BUILTIN_LEXICON)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Io(format!("Failed to read lexicon {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        let raw: Lexicon = toml::from_str(content)
            .map_err(|e| AppError::System(format!("Failed to parse lexicon: {}", e)))?;

        let lexicon = Lexicon {
            negations: raw.negations.into_iter().map(|n| n.to_lowercase()).collect(),
            emoticons: raw
                .emoticons
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect(),
            words: raw
                .words
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect(),
        };
        lexicon.validate()?;
        Ok(lexicon)
    }

    fn validate(&self) -> AppResult<()> {
        for (word, entry) in &self.words {
            if !(-1.0..=1.0).contains(&entry.polarity) {
                return Err(AppError::System(format!(
                    "Lexicon word '{}' has polarity {} outside [-1, 1]",
                    word, entry.polarity
                )));
            }
            if entry.intensity <= 0.0 {
                return Err(AppError::System(format!(
                    "Lexicon word '{}' must have a positive intensity",
                    word
                )));
            }
        }

        if let Some((emoticon, polarity)) = self
            .emoticons
            .iter()
            .find(|(_, p)| !(-1.0..=1.0).contains(*p))
        {
            return Err(AppError::System(format!(
                "Lexicon emoticon '{}' has polarity {} outside [-1, 1]",
                emoticon, polarity
            )));
        }

        Ok(())
    }

    /// Look up an already-lowercased word
    pub fn word(&self, word: &str) -> Option<&WordEntry> {
        self.words.get(word)
    }

    pub fn emoticon(&self, token: &str) -> Option<f64> {
        self.emoticons.get(token).copied()
    }

    /// Negations come from the lexicon's list plus any `n't` contraction
    pub fn is_negation(&self, word: &str) -> bool {
        word.ends_with("n't") || self.negations.iter().any(|n| n == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
