//! Lexicon-based polarity model
//!
//! Averages the polarity of every lexicon word found in the text. A modifier
//! scales the word right after it; a negation flips and halves the next
//! scored word within a short window.

use super::lexicon::{EnglishLexicon, SentimentLexicon};
use super::SentimentModel;
use crate::error::Result;
use crate::nlp::Tokenizer;

/// Factor applied to a negated word's polarity
const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone)]
pub struct LexiconSentimentModel {
    tokenizer: Tokenizer,
    lexicon: EnglishLexicon,
    /// Words after a negation that it can still reach
    negation_window: usize,
}

impl LexiconSentimentModel {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            lexicon: EnglishLexicon::new(),
            negation_window: 3,
        }
    }

    /// Use a custom lexicon
    pub fn with_lexicon(mut self, lexicon: EnglishLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    /// Polarity of `text` in [-1, 1]; 0.0 when no lexicon word occurs
    pub fn score(&self, text: &str) -> f64 {
        let tokens = self.tokenizer.tokenize(text);

        let mut total_score = 0.0;
        let mut word_count = 0;
        let mut current_modifier = 1.0;
        let mut negation_active = false;
        let mut words_since_negation = 0;

        for token in &tokens {
            if self.lexicon.is_negation(token) {
                negation_active = true;
                words_since_negation = 0;
                continue;
            }

            if let Some(modifier) = self.lexicon.get_modifier(token) {
                current_modifier = modifier;
                continue;
            }

            if let Some(base_score) = self.lexicon.get_score(token) {
                let mut score = base_score * current_modifier;
                if negation_active && words_since_negation < self.negation_window {
                    score *= NEGATION_FACTOR;
                    negation_active = false;
                }

                total_score += score;
                word_count += 1;
            } else if negation_active {
                words_since_negation += 1;
                if words_since_negation >= self.negation_window {
                    negation_active = false;
                }
            }

            // modifiers only reach the next word
            current_modifier = 1.0;
        }

        if word_count > 0 {
            (total_score / word_count as f64).clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }
}

impl Default for LexiconSentimentModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentModel for LexiconSentimentModel {
    fn polarity(&self, text: &str) -> Result<f64> {
        Ok(self.score(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_positive_sentiment() {
        let model = LexiconSentimentModel::new();
        let score = model.score("What a great and wonderful day!");
        assert_relative_eq!(score, 0.9, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_sentiment() {
        let model = LexiconSentimentModel::new();
        assert!(model.score("The results were terrible.") < -0.5);
    }

    #[test]
    fn test_negation() {
        let model = LexiconSentimentModel::new();
        assert_relative_eq!(model.score("This is not good"), -0.35, epsilon = 1e-12);
        assert_relative_eq!(model.score("It wasn't really that bad"), 0.35, epsilon = 1e-12);
    }

    #[test]
    fn test_modifier() {
        let model = LexiconSentimentModel::new();

        let normal = model.score("good");
        let intensified = model.score("very good");
        assert!(intensified > normal);

        // the modifier does not carry past an unscored word
        assert_relative_eq!(model.score("very long good"), normal, epsilon = 1e-12);
    }

    #[test]
    fn test_no_lexicon_words() {
        let model = LexiconSentimentModel::new();
        assert_eq!(model.score("The council met on Tuesday."), 0.0);
        assert_eq!(model.score(""), 0.0);
    }

    #[test]
    fn test_score_clamped() {
        let model = LexiconSentimentModel::new();
        let score = model.score("extremely excellent, absolutely perfect");
        assert_eq!(score, 1.0);
    }
}
