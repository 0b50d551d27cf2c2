//! Text tokenizer
//!
//! Splits text into lowercase word tokens and builds word n-grams for the
//! vectorizer.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

/// English stop words removed before n-gram construction
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
    "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
    "amongst", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below",
    "beside", "besides", "between", "beyond", "both", "but", "by", "can", "cannot", "could",
    "did", "do", "does", "done", "down", "due", "during", "each", "eg", "either", "else",
    "elsewhere", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "for", "former", "formerly", "from", "further", "had",
    "has", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hers",
    "herself", "him", "himself", "his", "how", "however", "i", "ie", "if", "in", "indeed",
    "into", "is", "it", "its", "itself", "just", "last", "latter", "latterly", "least", "less",
    "many", "may", "me", "meanwhile", "might", "mine", "more", "moreover", "most", "mostly",
    "much", "must", "my", "myself", "namely", "neither", "never", "nevertheless", "next",
    "no", "nobody", "none", "noone", "nor", "not", "nothing", "now", "nowhere", "of", "off",
    "often", "on", "once", "only", "onto", "or", "other", "others", "otherwise", "our", "ours",
    "ourselves", "out", "over", "own", "per", "perhaps", "please", "rather", "re", "same",
    "seem", "seemed", "seeming", "seems", "several", "she", "should", "since", "so", "some",
    "somehow", "someone", "something", "sometime", "sometimes", "somewhere", "still", "such",
    "than", "that", "the", "their", "them", "themselves", "then", "thence", "there",
    "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they", "this",
    "those", "though", "through", "throughout", "thru", "thus", "to", "together", "too",
    "toward", "towards", "under", "until", "up", "upon", "us", "very", "via", "was", "we",
    "well", "were", "what", "whatever", "when", "whence", "whenever", "where", "whereafter",
    "whereas", "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

/// Check whether a lowercase word is an English stop word
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Word tokenizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tokenizer {
    /// Minimum word length in characters
    min_word_length: usize,
    /// Maximum word length in characters
    max_word_length: usize,
    /// Drop English stop words
    remove_stop_words: bool,
    /// Smallest and largest n-gram size
    ngram_range: (usize, usize),
}

impl Tokenizer {
    /// Create a tokenizer that keeps every word and emits unigrams
    pub fn new() -> Self {
        Self {
            min_word_length: 1,
            max_word_length: 50,
            remove_stop_words: false,
            ngram_range: (1, 1),
        }
    }

    /// Set the minimum word length
    pub fn with_min_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }

    /// Set the maximum word length
    pub fn with_max_length(mut self, len: usize) -> Self {
        self.max_word_length = len;
        self
    }

    /// Remove English stop words
    pub fn with_stop_words(mut self, remove: bool) -> Self {
        self.remove_stop_words = remove;
        self
    }

    /// Set the n-gram range used by [`Tokenizer::ngrams`]
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        let min_n = min_n.max(1);
        self.ngram_range = (min_n, max_n.max(min_n));
        self
    }

    pub fn ngram_range(&self) -> (usize, usize) {
        self.ngram_range
    }

    /// Tokenize text into lowercase words.
    ///
    /// Punctuation other than inner apostrophes and hyphens is dropped, so
    /// "don't" survives as one token.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|word| self.clean_word(word))
            .filter(|word| {
                let len = word.chars().count();
                len >= self.min_word_length && len <= self.max_word_length
            })
            .filter(|word| !(self.remove_stop_words && is_stop_word(word)))
            .collect()
    }

    /// Tokenize and join consecutive tokens into n-grams
    pub fn ngrams(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenize(text);
        let (min_n, max_n) = self.ngram_range;
        let mut grams = Vec::new();

        for n in min_n..=max_n {
            if n > tokens.len() {
                break;
            }
            for window in tokens.windows(n) {
                grams.push(window.join(" "));
            }
        }

        grams
    }

    /// Lowercase a word and strip surrounding punctuation
    fn clean_word(&self, word: &str) -> String {
        let kept: String = word
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '\'' || *c == '’' || *c == '-')
            .map(|c| if c == '’' { '\'' } else { c })
            .collect::<String>()
            .to_lowercase();

        kept.trim_matches(|c| c == '\'' || c == '-').to_string()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
