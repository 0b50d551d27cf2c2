//! Statistical classifier adapter
//!
//! Answers from the trained artifacts held by the shared registry. Every
//! failure is reported as [`ClassifierUnavailable`] so the caller can fall
//! back to the heuristic classifier.

use super::{ArtifactRegistry, HeuristicClassifier};
use crate::error::ClassifierUnavailable;
use crate::models::ClassificationResult;
use crate::nlp::normalize;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct StatisticalClassifier {
    registry: Arc<ArtifactRegistry>,
}

impl StatisticalClassifier {
    pub fn new(registry: Arc<ArtifactRegistry>) -> Self {
        Self { registry }
    }

    pub fn is_available(&self) -> bool {
        self.registry.is_loaded()
    }

    /// Classify normalized text with the trained model
    pub fn classify(
        &self,
        normalized_text: &str,
    ) -> Result<ClassificationResult, ClassifierUnavailable> {
        let artifacts = self.registry.get()?;
        artifacts.predict(normalized_text)
    }

    /// Classify raw text with the trained model, answering from `fallback`
    /// on the same raw text when the model cannot
    pub fn classify_or_fallback(
        &self,
        text: &str,
        fallback: &HeuristicClassifier,
    ) -> ClassificationResult {
        let normalized = normalize(text);
        match self.classify(&normalized) {
            Ok(result) => result,
            Err(reason) => {
                tracing::debug!(%reason, "statistical classifier unavailable, using heuristic");
                fallback.classify(text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{sample_dataset, Trainer};
    use crate::models::Prediction;
    use crate::utils::TrainingConfig;

    #[test]
    fn test_unavailable_without_artifacts() {
        let classifier = StatisticalClassifier::new(Arc::new(ArtifactRegistry::empty()));
        assert!(!classifier.is_available());
        assert!(matches!(
            classifier.classify("some text"),
            Err(ClassifierUnavailable::NotLoaded(_))
        ));
    }

    #[test]
    fn test_fallback_matches_heuristic() {
        let classifier = StatisticalClassifier::new(Arc::new(ArtifactRegistry::empty()));
        let heuristic = HeuristicClassifier::new();
        let text = "BREAKING: one weird trick doctors hate!";

        assert_eq!(
            classifier.classify_or_fallback(text, &heuristic),
            heuristic.classify(text)
        );
    }

    #[test]
    fn test_classifies_with_trained_artifacts() {
        let config = TrainingConfig {
            test_size: 0.0,
            ..TrainingConfig::default()
        };
        let outcome = Trainer::new(config).train(&sample_dataset()).unwrap();
        let registry = Arc::new(ArtifactRegistry::from_artifacts(outcome.artifacts));
        let classifier = StatisticalClassifier::new(registry);

        let result = classifier.classify("").unwrap();
        assert!(matches!(result.label, Prediction::Fake | Prediction::Real));
        assert!(result.confidence > 0.0 && result.confidence <= 1.0);
    }
}
