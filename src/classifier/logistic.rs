//! Logistic Regression for binary text classification
//!
//! Trained with full-batch gradient descent on TF-IDF features and an L2
//! penalty equivalent to `C * sum(log_loss) + 0.5 * ||w||^2`.

use super::ProbabilisticClassifier;
use crate::error::{ClassifierUnavailable, Error, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Binary Logistic Regression classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// Class names; index 1 is the positive class
    classes: Vec<String>,
    /// Fitted coefficients
    coefficients: Option<Array1<f64>>,
    /// Intercept term
    intercept: Option<f64>,
    /// Inverse regularization strength
    c: f64,
    learning_rate: f64,
    max_iter: usize,
    /// Convergence tolerance on the cost
    tolerance: f64,
    /// Cost history during training
    #[serde(skip)]
    cost_history: Vec<f64>,
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new(1.0, 0.5, 1000, 1e-6)
    }
}

impl LogisticRegression {
    pub fn new(c: f64, learning_rate: f64, max_iter: usize, tolerance: f64) -> Self {
        Self {
            classes: Vec::new(),
            coefficients: None,
            intercept: None,
            c,
            learning_rate,
            max_iter,
            tolerance,
            cost_history: Vec::new(),
        }
    }

    fn sigmoid(z: f64) -> f64 {
        if z >= 0.0 {
            1.0 / (1.0 + (-z).exp())
        } else {
            let exp_z = z.exp();
            exp_z / (1.0 + exp_z)
        }
    }

    /// Log loss (binary cross-entropy)
    fn log_loss(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
        let eps = 1e-15;
        let n = y_true.len() as f64;

        -y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(&y, &p)| {
                let p = p.clamp(eps, 1.0 - eps);
                y * p.ln() + (1.0 - y) * (1.0 - p).ln()
            })
            .sum::<f64>()
            / n
    }

    /// Fit on a feature matrix and string labels.
    ///
    /// Exactly two distinct labels are required; they are sorted so the
    /// class order does not depend on sample order.
    pub fn fit(&mut self, features: &[Vec<f64>], labels: &[String]) -> Result<()> {
        if features.is_empty() || features.len() != labels.len() {
            return Err(Error::TrainingError(format!(
                "expected one label per sample, got {} samples and {} labels",
                features.len(),
                labels.len()
            )));
        }

        let mut classes: Vec<String> = labels.to_vec();
        classes.sort();
        classes.dedup();
        if classes.len() != 2 {
            return Err(Error::TrainingError(format!(
                "logistic regression needs exactly 2 classes, got {}",
                classes.len()
            )));
        }

        let n_samples = features.len();
        let n_features = features[0].len();
        if features.iter().any(|row| row.len() != n_features) {
            return Err(Error::TrainingError("ragged feature matrix".to_string()));
        }

        let flat: Vec<f64> = features.iter().flatten().copied().collect();
        let x = Array2::from_shape_vec((n_samples, n_features), flat)
            .map_err(|e| Error::TrainingError(e.to_string()))?;
        let y: Array1<f64> = labels
            .iter()
            .map(|label| if *label == classes[1] { 1.0 } else { 0.0 })
            .collect();

        let n = n_samples as f64;
        let alpha = 1.0 / (self.c * n);

        let mut weights = Array1::<f64>::zeros(n_features);
        let mut bias = 0.0;
        self.cost_history.clear();

        for iter in 0..self.max_iter {
            let linear = x.dot(&weights) + bias;
            let predictions = linear.mapv(Self::sigmoid);

            let errors = &predictions - &y;
            let dw = x.t().dot(&errors) / n + &weights * alpha;
            let db = errors.sum() / n;

            weights = &weights - &(&dw * self.learning_rate);
            bias -= self.learning_rate * db;

            let cost = Self::log_loss(&y, &predictions)
                + 0.5 * alpha * weights.iter().map(|w| w * w).sum::<f64>();
            self.cost_history.push(cost);

            if iter > 0 && (self.cost_history[iter - 1] - cost).abs() < self.tolerance {
                tracing::debug!("Converged at iteration {}", iter);
                break;
            }
        }

        self.classes = classes;
        self.coefficients = Some(weights);
        self.intercept = Some(bias);

        Ok(())
    }

    /// Probability of the positive class (`classes[1]`)
    pub fn positive_proba(&self, features: &[f64]) -> std::result::Result<f64, ClassifierUnavailable> {
        let weights = self
            .coefficients
            .as_ref()
            .ok_or(ClassifierUnavailable::NotFitted)?;
        let bias = self.intercept.ok_or(ClassifierUnavailable::NotFitted)?;

        if features.len() != weights.len() {
            return Err(ClassifierUnavailable::Incompatible {
                expected: weights.len(),
                got: features.len(),
            });
        }

        let z: f64 = weights
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + bias;

        Ok(Self::sigmoid(z))
    }

    pub fn cost_history(&self) -> &[f64] {
        &self.cost_history
    }

    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }
}

impl ProbabilisticClassifier for LogisticRegression {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn n_features(&self) -> Option<usize> {
        self.coefficients.as_ref().map(|w| w.len())
    }

    fn predict_proba(&self, features: &[f64]) -> std::result::Result<Vec<f64>, ClassifierUnavailable> {
        let p = self.positive_proba(features)?;
        Ok(vec![1.0 - p, p])
    }
}
