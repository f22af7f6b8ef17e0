//! Fallback polarity analysis for text the override table does not cover

pub mod lexicon;
pub mod pattern;

pub use lexicon::{Lexicon, WordEntry};
pub use pattern::PatternAnalyzer;
