//! Classification metrics for evaluating the trained fake-news model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Precision, recall and F1 of a single class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub label: String,
    /// TP / (TP + FP)
    pub precision: f64,
    /// TP / (TP + FN)
    pub recall: f64,
    /// Harmonic mean of precision and recall
    pub f1: f64,
    /// Number of held-out samples with this true label
    pub support: usize,
}

/// Held-out evaluation of a trained classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub accuracy: f64,
    pub per_class: Vec<ClassMetrics>,
    pub n_train: usize,
    pub n_test: usize,
}

fn ratio(num: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}

impl EvaluationReport {
    /// Build the report from true and predicted labels of the test split
    pub fn from_predictions(
        classes: &[String],
        y_true: &[String],
        y_pred: &[String],
        n_train: usize,
    ) -> Self {
        let correct = y_true
            .iter()
            .zip(y_pred.iter())
            .filter(|(t, p)| t == p)
            .count();

        let per_class = classes
            .iter()
            .map(|class| {
                let mut tp = 0;
                let mut fp = 0;
                let mut fn_ = 0;

                for (t, p) in y_true.iter().zip(y_pred.iter()) {
                    match (t == class, p == class) {
                        (true, true) => tp += 1,
                        (false, true) => fp += 1,
                        (true, false) => fn_ += 1,
                        (false, false) => {}
                    }
                }

                let precision = ratio(tp, tp + fp);
                let recall = ratio(tp, tp + fn_);
                let f1 = if precision + recall < 1e-10 {
                    0.0
                } else {
                    2.0 * precision * recall / (precision + recall)
                };

                ClassMetrics {
                    label: class.clone(),
                    precision,
                    recall,
                    f1,
                    support: tp + fn_,
                }
            })
            .collect();

        Self {
            accuracy: ratio(correct, y_true.len()),
            per_class,
            n_train,
            n_test: y_true.len(),
        }
    }

    pub fn macro_f1(&self) -> f64 {
        if self.per_class.is_empty() {
            return 0.0;
        }
        self.per_class.iter().map(|c| c.f1).sum::<f64>() / self.per_class.len() as f64
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Model accuracy: {:.2} ({} train / {} test)",
            self.accuracy, self.n_train, self.n_test
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "{:>12} {:>10} {:>10} {:>10} {:>10}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        for class in &self.per_class {
            writeln!(
                f,
                "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}",
                class.label, class.precision, class.recall, class.f1, class.support
            )?;
        }
        write!(f, "{:>12} {:>32.2}", "macro f1", self.macro_f1())
    }
}
