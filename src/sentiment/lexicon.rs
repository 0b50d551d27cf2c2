//! Sentiment lexicons
//!
//! Contains:
//! - The lexicon trait used by the scorer
//! - A general-purpose English lexicon for news prose

use std::collections::{HashMap, HashSet};

/// Word-level polarity dictionary
pub trait SentimentLexicon: Send + Sync {
    /// Polarity of a word (-1.0 to 1.0)
    fn get_score(&self, word: &str) -> Option<f64>;

    /// Multiplier applied to the next scored word ("very", "slightly")
    fn get_modifier(&self, word: &str) -> Option<f64>;

    /// Whether the word negates the following scored word
    fn is_negation(&self, word: &str) -> bool;

    /// Whether the word carries a polarity
    fn contains(&self, word: &str) -> bool {
        self.get_score(word).is_some()
    }
}

/// General-purpose English sentiment lexicon
#[derive(Debug, Clone)]
pub struct EnglishLexicon {
    /// Polarity of every scored word
    scores: HashMap<String, f64>,
    /// Intensifiers and diminishers
    modifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl EnglishLexicon {
    pub fn new() -> Self {
        let positive = [
            ("good", 0.7),
            ("great", 0.8),
            ("excellent", 1.0),
            ("best", 1.0),
            ("better", 0.5),
            ("amazing", 0.6),
            ("wonderful", 1.0),
            ("fantastic", 0.4),
            ("incredible", 0.9),
            ("awesome", 1.0),
            ("perfect", 1.0),
            ("beautiful", 0.85),
            ("brilliant", 0.9),
            ("happy", 0.8),
            ("glad", 0.5),
            ("love", 0.5),
            ("nice", 0.6),
            ("positive", 0.23),
            ("promising", 0.5),
            ("success", 0.3),
            ("successful", 0.75),
            ("win", 0.8),
            ("wins", 0.8),
            ("winning", 0.5),
            ("benefit", 0.4),
            ("beneficial", 0.6),
            ("improve", 0.4),
            ("improved", 0.4),
            ("improvement", 0.4),
            ("growth", 0.3),
            ("steady", 0.2),
            ("strong", 0.43),
            ("stable", 0.3),
            ("safe", 0.5),
            ("healthy", 0.5),
            ("helpful", 0.5),
            ("hope", 0.4),
            ("hopeful", 0.5),
            ("optimistic", 0.6),
            ("progress", 0.4),
            ("breakthrough", 0.6),
            ("innovative", 0.5),
            ("impressive", 1.0),
            ("remarkable", 0.75),
            ("outstanding", 0.5),
            ("favorable", 0.5),
            ("welcome", 0.8),
            ("celebrate", 0.5),
            ("praise", 0.6),
            ("recovery", 0.3),
            ("support", 0.3),
            ("agree", 0.3),
            ("effective", 0.6),
            ("efficient", 0.5),
            ("easy", 0.43),
            ("fair", 0.7),
            ("free", 0.4),
            ("fun", 0.3),
            ("interesting", 0.5),
            ("important", 0.4),
            ("new", 0.14),
            ("clean", 0.37),
            ("renewable", 0.2),
            ("secure", 0.4),
            ("trusted", 0.5),
            ("reliable", 0.5),
            ("accurate", 0.4),
        ];

        let negative = [
            ("bad", -0.7),
            ("worse", -0.4),
            ("worst", -1.0),
            ("terrible", -1.0),
            ("horrible", -1.0),
            ("awful", -1.0),
            ("poor", -0.4),
            ("sad", -0.5),
            ("angry", -0.5),
            ("hate", -0.8),
            ("fear", -0.6),
            ("afraid", -0.6),
            ("scary", -0.5),
            ("shocking", -1.0),
            ("outrageous", -0.7),
            ("dangerous", -0.6),
            ("deadly", -0.8),
            ("dead", -0.2),
            ("death", -0.5),
            ("kill", -0.6),
            ("killed", -0.6),
            ("crisis", -0.5),
            ("disaster", -0.8),
            ("catastrophe", -0.9),
            ("collapse", -0.6),
            ("crash", -0.6),
            ("fail", -0.5),
            ("failed", -0.5),
            ("failure", -0.6),
            ("fraud", -0.8),
            ("scam", -0.8),
            ("fake", -0.5),
            ("false", -0.35),
            ("lie", -0.6),
            ("lies", -0.6),
            ("corrupt", -0.7),
            ("conspiracy", -0.3),
            ("threat", -0.5),
            ("attack", -0.5),
            ("war", -0.4),
            ("violent", -0.8),
            ("violence", -0.7),
            ("loss", -0.4),
            ("lost", -0.4),
            ("decline", -0.3),
            ("drop", -0.3),
            ("weak", -0.38),
            ("risk", -0.3),
            ("risky", -0.4),
            ("problem", -0.4),
            ("problems", -0.4),
            ("worried", -0.5),
            ("concern", -0.3),
            ("warning", -0.4),
            ("damage", -0.5),
            ("harmful", -0.6),
            ("illegal", -0.5),
            ("wrong", -0.5),
            ("ugly", -0.7),
            ("stupid", -0.8),
            ("ridiculous", -0.33),
            ("useless", -0.5),
            ("pathetic", -1.0),
            ("disgusting", -1.0),
            ("evil", -1.0),
            ("hiding", -0.2),
            ("cancer", -0.3),
            ("sick", -0.7),
            ("difficult", -0.5),
            ("hard", -0.3),
        ];

        let modifiers = [
            ("very", 1.3),
            ("really", 1.3),
            ("extremely", 1.5),
            ("incredibly", 1.5),
            ("highly", 1.4),
            ("absolutely", 1.5),
            ("totally", 1.3),
            ("completely", 1.4),
            ("most", 1.2),
            ("so", 1.2),
            ("too", 1.2),
            ("quite", 1.1),
            ("somewhat", 0.8),
            ("slightly", 0.7),
            ("fairly", 0.8),
            ("barely", 0.5),
            ("rather", 0.9),
        ];

        let negations = [
            "not", "no", "never", "neither", "nor", "nobody", "nothing", "nowhere", "hardly",
            "dont", "don't", "doesnt", "doesn't", "didnt", "didn't", "cant", "can't", "cannot",
            "couldnt", "couldn't", "wont", "won't", "wouldnt", "wouldn't", "shouldnt",
            "shouldn't", "isnt", "isn't", "arent", "aren't", "wasnt", "wasn't", "werent",
            "weren't", "havent", "haven't", "hasnt", "hasn't", "hadnt", "hadn't",
        ];

        Self {
            scores: positive
                .iter()
                .chain(negative.iter())
                .map(|(word, score)| (word.to_string(), *score))
                .collect(),
            modifiers: modifiers
                .iter()
                .map(|(word, m)| (word.to_string(), *m))
                .collect(),
            negations: negations.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Add or override a scored word
    pub fn add_word(&mut self, word: &str, score: f64) {
        self.scores
            .insert(word.to_lowercase(), score.clamp(-1.0, 1.0));
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl Default for EnglishLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentLexicon for EnglishLexicon {
    fn get_score(&self, word: &str) -> Option<f64> {
        self.scores.get(&word.to_lowercase()).copied()
    }

    fn get_modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(&word.to_lowercase()).copied()
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_and_negative_words() {
        let lexicon = EnglishLexicon::new();

        assert!(lexicon.get_score("excellent").unwrap() > 0.5);
        assert!(lexicon.get_score("GREAT").unwrap() > 0.5);
        assert!(lexicon.get_score("terrible").unwrap() < -0.5);
        assert!(!lexicon.contains("table"));
    }

    #[test]
    fn test_negation_detection() {
        let lexicon = EnglishLexicon::new();

        assert!(lexicon.is_negation("not"));
        assert!(lexicon.is_negation("doesn't"));
        assert!(!lexicon.is_negation("good"));
    }

    #[test]
    fn test_modifier() {
        let lexicon = EnglishLexicon::new();

        assert!(lexicon.get_modifier("very").unwrap() > 1.0);
        assert!(lexicon.get_modifier("slightly").unwrap() < 1.0);
        assert_eq!(lexicon.get_modifier("good"), None);
    }

    #[test]
    fn test_add_word_clamps() {
        let mut lexicon = EnglishLexicon::new();
        lexicon.add_word("Stellar", 3.0);
        assert_eq!(lexicon.get_score("stellar"), Some(1.0));
    }
}
