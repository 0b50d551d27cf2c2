//! Fake-news classification
//!
//! Includes:
//! - Keyword heuristic classifier (always available)
//! - Logistic Regression and Naive Bayes models over TF-IDF features
//! - Trained artifact persistence and the process-wide registry
//! - The statistical classifier adapter used by the analysis pipeline
//! - Offline training and evaluation

mod artifacts;
mod heuristic;
mod logistic;
mod metrics;
mod naive_bayes;
mod statistical;
mod training;

pub use artifacts::{ArtifactRegistry, ClassifierModel, TrainedArtifacts, ARTIFACT_FORMAT_VERSION};
pub use heuristic::{HeuristicClassifier, IndicatorCounts, FAKE_INDICATORS, REAL_INDICATORS};
pub use logistic::LogisticRegression;
pub use metrics::{ClassMetrics, EvaluationReport};
pub use naive_bayes::NaiveBayesClassifier;
pub use statistical::StatisticalClassifier;
pub use training::{
    load_dataset, sample_dataset, train_test_split, LabeledText, Trainer, TrainingOutcome,
};

use crate::error::ClassifierUnavailable;

/// A fitted classifier that reports class probabilities
pub trait ProbabilisticClassifier {
    /// Class names, in the order of `predict_proba` output
    fn classes(&self) -> &[String];

    /// Expected feature vector width, `None` before fitting
    fn n_features(&self) -> Option<usize>;

    /// Probability of every class for one feature vector
    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, ClassifierUnavailable>;

    /// Most probable class and its probability
    fn predict(&self, features: &[f64]) -> Result<(String, f64), ClassifierUnavailable> {
        let proba = self.predict_proba(features)?;
        let classes = self.classes();

        if proba.is_empty() || proba.len() != classes.len() || proba.iter().any(|p| !p.is_finite())
        {
            return Err(ClassifierUnavailable::InvalidProbabilities);
        }

        proba
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(idx, &p)| (classes[idx].clone(), p))
            .ok_or(ClassifierUnavailable::InvalidProbabilities)
    }
}
