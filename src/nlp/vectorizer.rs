//! Text vectorization
//!
//! Converts normalized text into numeric feature vectors:
//! - Bag of Words (term counts)
//! - TF-IDF (Term Frequency - Inverse Document Frequency)

use crate::error::{ClassifierUnavailable, Error, Result};
use crate::nlp::Tokenizer;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Common interface for fitted text vectorizers
pub trait Vectorizer {
    /// Learn the vocabulary from a corpus of documents
    fn fit(&mut self, documents: &[String]) -> Result<()>;

    /// Convert one document into a feature vector
    fn transform(&self, document: &str) -> Vec<f64>;

    /// Fit and transform the corpus
    fn fit_transform(&mut self, documents: &[String]) -> Result<Vec<Vec<f64>>> {
        self.fit(documents)?;
        Ok(documents.iter().map(|doc| self.transform(doc)).collect())
    }

    /// Term -> column index
    fn vocabulary(&self) -> &HashMap<String, usize>;

    /// Width of the produced vectors
    fn n_features(&self) -> usize {
        self.vocabulary().len()
    }
}

/// Bag of Words vectorizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BagOfWords {
    /// Produces the terms of each document
    tokenizer: Tokenizer,
    /// Term -> index
    vocabulary: HashMap<String, usize>,
    /// Index -> term
    terms: Vec<String>,
    /// Minimum document frequency (absolute count)
    min_df: usize,
    /// Maximum document frequency (fraction of documents)
    max_df: f64,
    /// Keep only the most frequent terms across the corpus
    max_features: Option<usize>,
    /// Binary mode (1 if present, 0 otherwise)
    binary: bool,
}

impl BagOfWords {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            vocabulary: HashMap::new(),
            terms: Vec::new(),
            min_df: 1,
            max_df: 1.0,
            max_features: None,
            binary: false,
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    /// Set the maximum document frequency as a fraction of the corpus size
    pub fn with_max_df(mut self, max_df: f64) -> Self {
        self.max_df = max_df;
        self
    }

    pub fn with_max_features(mut self, max_features: Option<usize>) -> Self {
        self.max_features = max_features;
        self
    }

    pub fn with_binary(mut self, binary: bool) -> Self {
        self.binary = binary;
        self
    }

    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Every vocabulary entry must point at its own column
    fn check_layout(&self) -> std::result::Result<(), ClassifierUnavailable> {
        let width = self.terms.len();
        if self.vocabulary.len() != width {
            return Err(ClassifierUnavailable::Incompatible {
                expected: width,
                got: self.vocabulary.len(),
            });
        }

        for (term, &idx) in &self.vocabulary {
            if self.terms.get(idx) != Some(term) {
                return Err(ClassifierUnavailable::Incompatible {
                    expected: width,
                    got: idx,
                });
            }
        }

        Ok(())
    }

    /// Terms of a single document, in order
    fn analyze(&self, document: &str) -> Vec<String> {
        self.tokenizer.ngrams(document)
    }
}

impl Default for BagOfWords {
    fn default() -> Self {
        Self::new()
    }
}

impl Vectorizer for BagOfWords {
    fn fit(&mut self, documents: &[String]) -> Result<()> {
        if documents.is_empty() {
            return Err(Error::TrainingError(
                "cannot fit a vectorizer on an empty corpus".to_string(),
            ));
        }

        // Document and corpus frequency of every term
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        let mut term_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let terms = self.analyze(doc);
            let unique_terms: HashSet<&String> = terms.iter().collect();
            for term in unique_terms {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
            for term in terms.iter() {
                *term_freq.entry(term.clone()).or_insert(0) += 1;
            }
        }

        let max_count = self.max_df * documents.len() as f64;

        let mut kept: Vec<(String, usize)> = doc_freq
            .into_iter()
            .filter(|(_, df)| *df >= self.min_df && (*df as f64) <= max_count)
            .map(|(term, _)| {
                let tf = term_freq.get(&term).copied().unwrap_or(0);
                (term, tf)
            })
            .collect();

        if let Some(limit) = self.max_features {
            // Most frequent first, ties alphabetical
            kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            kept.truncate(limit);
        }

        // Column order is alphabetical
        kept.sort_by(|a, b| a.0.cmp(&b.0));

        self.vocabulary.clear();
        self.terms.clear();

        for (idx, (term, _)) in kept.into_iter().enumerate() {
            self.vocabulary.insert(term.clone(), idx);
            self.terms.push(term);
        }

        if self.terms.is_empty() {
            return Err(Error::TrainingError(
                "empty vocabulary; documents contain only stop words or were pruned".to_string(),
            ));
        }

        Ok(())
    }

    fn transform(&self, document: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.terms.len()];

        for term in self.analyze(document) {
            let slot = self
                .vocabulary
                .get(&term)
                .and_then(|&idx| vector.get_mut(idx));
            if let Some(slot) = slot {
                if self.binary {
                    *slot = 1.0;
                } else {
                    *slot += 1.0;
                }
            }
        }

        vector
    }

    fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }
}

/// TF-IDF vectorizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfIdf {
    /// Underlying term counter
    bow: BagOfWords,
    /// IDF weight of every term
    idf: Vec<f64>,
    /// L2-normalize vectors
    normalize: bool,
    /// Add one to document frequencies, as if an extra document held every term
    smooth_idf: bool,
}

impl TfIdf {
    pub fn new() -> Self {
        Self {
            bow: BagOfWords::new(),
            idf: Vec::new(),
            normalize: true,
            smooth_idf: true,
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.bow = self.bow.with_tokenizer(tokenizer);
        self
    }

    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.bow = self.bow.with_min_df(min_df);
        self
    }

    pub fn with_max_df(mut self, max_df: f64) -> Self {
        self.bow = self.bow.with_max_df(max_df);
        self
    }

    pub fn with_max_features(mut self, max_features: Option<usize>) -> Self {
        self.bow = self.bow.with_max_features(max_features);
        self
    }

    /// L2 normalization of output vectors
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_smooth_idf(mut self, smooth: bool) -> Self {
        self.smooth_idf = smooth;
        self
    }

    fn calculate_idf(&mut self, documents: &[String]) {
        let n_docs = documents.len() as f64;
        let n_terms = self.bow.n_terms();

        let mut doc_freq = vec![0usize; n_terms];

        for doc in documents {
            let terms = self.bow.analyze(doc);
            let unique_terms: HashSet<&String> = terms.iter().collect();
            for term in unique_terms {
                if let Some(&idx) = self.bow.vocabulary.get(term) {
                    doc_freq[idx] += 1;
                }
            }
        }

        self.idf = doc_freq
            .into_iter()
            .map(|df| {
                let (n, df) = if self.smooth_idf {
                    (n_docs + 1.0, df as f64 + 1.0)
                } else {
                    (n_docs, (df as f64).max(1.0))
                };
                (n / df).ln() + 1.0
            })
            .collect();
    }

    fn l2_normalize(vector: &mut [f64]) {
        let norm: f64 = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for x in vector.iter_mut() {
                *x /= norm;
            }
        }
    }

    /// Check that vocabulary, term list and IDF weights describe the same columns.
    ///
    /// A deserialized vectorizer must pass this before it is used.
    pub fn check_layout(&self) -> std::result::Result<(), ClassifierUnavailable> {
        self.bow.check_layout()?;
        if self.idf.len() != self.bow.n_terms() {
            return Err(ClassifierUnavailable::Incompatible {
                expected: self.bow.n_terms(),
                got: self.idf.len(),
            });
        }
        Ok(())
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn terms(&self) -> &[String] {
        self.bow.terms()
    }

    /// Top-N terms by IDF (rarest first)
    pub fn top_terms(&self, n: usize) -> Vec<(String, f64)> {
        let mut term_idf: Vec<_> = self
            .bow
            .terms
            .iter()
            .zip(self.idf.iter())
            .map(|(term, idf)| (term.clone(), *idf))
            .collect();

        term_idf.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        term_idf.truncate(n);
        term_idf
    }
}

impl Default for TfIdf {
    fn default() -> Self {
        Self::new()
    }
}

impl Vectorizer for TfIdf {
    fn fit(&mut self, documents: &[String]) -> Result<()> {
        self.bow.fit(documents)?;
        self.calculate_idf(documents);
        Ok(())
    }

    fn transform(&self, document: &str) -> Vec<f64> {
        let mut tf_vector = self.bow.transform(document);

        for (tf, idf) in tf_vector.iter_mut().zip(self.idf.iter()) {
            *tf *= idf;
        }

        if self.normalize {
            Self::l2_normalize(&mut tf_vector);
        }

        tf_vector
    }

    fn vocabulary(&self) -> &HashMap<String, usize> {
        self.bow.vocabulary()
    }
}
