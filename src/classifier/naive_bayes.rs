//! Multinomial Naive Bayes classifier
//!
//! Works on non-negative feature vectors (term counts or TF-IDF weights),
//! treating each feature value as a fractional count.

use super::ProbabilisticClassifier;
use crate::error::{ClassifierUnavailable, Error, Result};
use serde::{Deserialize, Serialize};

/// Naive Bayes classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayesClassifier {
    /// Sorted class names
    classes: Vec<String>,
    /// log P(class)
    class_log_prior: Vec<f64>,
    /// log P(feature | class), one row per class
    feature_log_prob: Vec<Vec<f64>>,
    /// Laplace smoothing
    alpha: f64,
    /// Whether the model has been fitted
    trained: bool,
}

impl NaiveBayesClassifier {
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            class_log_prior: Vec::new(),
            feature_log_prob: Vec::new(),
            alpha: 1.0,
            trained: false,
        }
    }

    /// Set the smoothing parameter
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Fit the classifier
    ///
    /// # Arguments
    /// * `features` - One non-negative feature vector per document
    /// * `labels` - Class label of each document
    pub fn fit(&mut self, features: &[Vec<f64>], labels: &[String]) -> Result<()> {
        if features.is_empty() || features.len() != labels.len() {
            return Err(Error::TrainingError(
                "documents and labels must be non-empty and have the same length".to_string(),
            ));
        }

        let n_features = features[0].len();
        if features.iter().any(|row| row.len() != n_features) {
            return Err(Error::TrainingError("ragged feature matrix".to_string()));
        }
        if features.iter().flatten().any(|&v| v < 0.0 || !v.is_finite()) {
            return Err(Error::TrainingError(
                "naive Bayes needs non-negative finite features".to_string(),
            ));
        }

        let mut classes: Vec<String> = labels.to_vec();
        classes.sort();
        classes.dedup();

        let total_docs = labels.len() as f64;
        let mut class_counts = vec![0usize; classes.len()];
        let mut feature_counts = vec![vec![0.0; n_features]; classes.len()];

        for (row, label) in features.iter().zip(labels.iter()) {
            // classes was built from labels, so the search always succeeds
            let Ok(c) = classes.binary_search(label) else {
                continue;
            };
            class_counts[c] += 1;
            for (acc, &v) in feature_counts[c].iter_mut().zip(row.iter()) {
                *acc += v;
            }
        }

        self.class_log_prior = class_counts
            .iter()
            .map(|&count| (count as f64 / total_docs).ln())
            .collect();

        // P(feature|class) = (count + alpha) / (total + alpha * n_features)
        self.feature_log_prob = feature_counts
            .iter()
            .map(|counts| {
                let total: f64 = counts.iter().sum();
                let denom = total + self.alpha * n_features as f64;
                counts
                    .iter()
                    .map(|&count| ((count + self.alpha) / denom).ln())
                    .collect()
            })
            .collect();

        self.classes = classes;
        self.trained = true;

        Ok(())
    }

    /// Accuracy on labelled data
    pub fn score(&self, features: &[Vec<f64>], labels: &[String]) -> f64 {
        if labels.is_empty() {
            return 0.0;
        }

        let correct = features
            .iter()
            .zip(labels.iter())
            .filter(|(row, label)| {
                self.predict(row)
                    .map(|(predicted, _)| predicted == **label)
                    .unwrap_or(false)
            })
            .count();

        correct as f64 / labels.len() as f64
    }

    pub fn is_fitted(&self) -> bool {
        self.trained
    }
}

impl Default for NaiveBayesClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbabilisticClassifier for NaiveBayesClassifier {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn n_features(&self) -> Option<usize> {
        self.feature_log_prob.first().map(|row| row.len())
    }

    fn predict_proba(&self, features: &[f64]) -> std::result::Result<Vec<f64>, ClassifierUnavailable> {
        if !self.trained {
            return Err(ClassifierUnavailable::NotFitted);
        }

        let expected = self.n_features().unwrap_or(0);
        if features.len() != expected {
            return Err(ClassifierUnavailable::Incompatible {
                expected,
                got: features.len(),
            });
        }

        let scores: Vec<f64> = self
            .class_log_prior
            .iter()
            .zip(self.feature_log_prob.iter())
            .map(|(prior, log_probs)| {
                prior
                    + log_probs
                        .iter()
                        .zip(features.iter())
                        .map(|(lp, x)| lp * x)
                        .sum::<f64>()
            })
            .collect();

        // Normalize to probabilities (softmax)
        let max_score = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let sum_exp: f64 = scores.iter().map(|s| (s - max_score).exp()).sum();

        Ok(scores
            .iter()
            .map(|s| (s - max_score).exp() / sum_exp)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_naive_bayes_basic() {
        // columns: good, great, bad, terrible
        let features = vec![
            vec![1.0, 1.0, 0.0, 0.0],
            vec![0.0, 2.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 1.0],
            vec![0.0, 0.0, 2.0, 0.0],
        ];
        let y = labels(&["Real", "Real", "Fake", "Fake"]);

        let mut classifier = NaiveBayesClassifier::new();
        classifier.fit(&features, &y).unwrap();

        assert_eq!(classifier.predict(&[1.0, 1.0, 0.0, 0.0]).unwrap().0, "Real");
        assert_eq!(classifier.predict(&[0.0, 0.0, 1.0, 1.0]).unwrap().0, "Fake");
        assert_eq!(classifier.score(&features, &y), 1.0);
    }

    #[test]
    fn test_naive_bayes_probabilities() {
        let features = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let y = labels(&["Fake", "Real"]);

        let mut classifier = NaiveBayesClassifier::new().with_alpha(0.5);
        classifier.fit(&features, &y).unwrap();

        let proba = classifier.predict_proba(&[1.0, 0.0]).unwrap();
        assert!(proba[0] > proba[1]);
        assert!((proba.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_negative_features() {
        let mut classifier = NaiveBayesClassifier::new();
        let result = classifier.fit(&[vec![-1.0]], &labels(&["Fake"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_unfitted() {
        let classifier = NaiveBayesClassifier::new();
        assert_eq!(
            classifier.predict_proba(&[1.0]),
            Err(ClassifierUnavailable::NotFitted)
        );
    }
}
