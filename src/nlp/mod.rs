//! Natural language processing
//!
//! Includes:
//! - Normalization for the statistical classifier
//! - Tokenization and n-grams
//! - Vectorization (Bag of Words, TF-IDF)

mod normalizer;
mod tokenizer;
mod vectorizer;

pub use normalizer::{clean_article_text, normalize};
pub use tokenizer::{is_stop_word, Tokenizer};
pub use vectorizer::{BagOfWords, TfIdf, Vectorizer};
