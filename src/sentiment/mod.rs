//! Sentiment analysis
//!
//! Includes:
//! - General-purpose English lexicon
//! - Lexicon-based polarity model with intensifiers and negation
//! - The scorer used by the analysis pipeline

mod analyzer;
mod lexicon;
mod scorer;

pub use analyzer::LexiconSentimentModel;
pub use lexicon::{EnglishLexicon, SentimentLexicon};
pub use scorer::SentimentScorer;

use crate::error::Result;

/// Continuous polarity model, swappable inside [`SentimentScorer`]
pub trait SentimentModel: Send + Sync {
    /// Polarity of `text`, expected in [-1, 1]
    fn polarity(&self, text: &str) -> Result<f64>;
}
