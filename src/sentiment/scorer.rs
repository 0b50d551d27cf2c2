//! Sentiment scoring stage of the analysis pipeline

use super::{LexiconSentimentModel, SentimentModel};
use crate::models::{Polarity, SentimentResult};
use crate::utils::SentimentConfig;
use std::fmt;
use std::sync::Arc;

/// Turns a polarity model's score into a labelled [`SentimentResult`].
///
/// Model failures never escape: they are logged and reported as neutral.
#[derive(Clone)]
pub struct SentimentScorer {
    model: Arc<dyn SentimentModel>,
    config: SentimentConfig,
}

impl SentimentScorer {
    pub fn new(config: SentimentConfig) -> Self {
        Self::with_model(Arc::new(LexiconSentimentModel::new()), config)
    }

    pub fn with_model(model: Arc<dyn SentimentModel>, config: SentimentConfig) -> Self {
        Self { model, config }
    }

    pub fn score(&self, text: &str) -> SentimentResult {
        if text.is_empty() {
            return SentimentResult::neutral();
        }

        let score = match self.model.polarity(text) {
            Ok(score) if score.is_finite() => score.clamp(-1.0, 1.0),
            Ok(score) => {
                tracing::warn!(score, "sentiment model returned a non-finite score");
                return SentimentResult::neutral();
            }
            Err(e) => {
                tracing::warn!(error = %e, "sentiment model failed");
                return SentimentResult::neutral();
            }
        };

        SentimentResult {
            label: Polarity::from_score_with_thresholds(
                score,
                self.config.positive_threshold,
                self.config.negative_threshold,
            ),
            score,
        }
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new(SentimentConfig::default())
    }
}

impl fmt::Debug for SentimentScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentScorer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};

    struct FailingModel;

    impl SentimentModel for FailingModel {
        fn polarity(&self, _text: &str) -> Result<f64> {
            Err(Error::SentimentError("model crashed".to_string()))
        }
    }

    struct NanModel;

    impl SentimentModel for NanModel {
        fn polarity(&self, _text: &str) -> Result<f64> {
            Ok(f64::NAN)
        }
    }

    struct FixedModel(f64);

    impl SentimentModel for FixedModel {
        fn polarity(&self, _text: &str) -> Result<f64> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(SentimentScorer::default().score(""), SentimentResult::neutral());
    }

    #[test]
    fn test_labels_follow_thresholds() {
        let scorer = SentimentScorer::default();
        assert_eq!(scorer.score("A great result").label, Polarity::Positive);
        assert_eq!(scorer.score("A terrible result").label, Polarity::Negative);
        assert_eq!(scorer.score("The meeting is on Monday").label, Polarity::Neutral);
    }

    #[test]
    fn test_dead_zone_boundaries() {
        let config = SentimentConfig::default();
        let at = |score| SentimentScorer::with_model(Arc::new(FixedModel(score)), config.clone());

        assert_eq!(at(0.1).score("x").label, Polarity::Neutral);
        assert_eq!(at(0.11).score("x").label, Polarity::Positive);
        assert_eq!(at(-0.1).score("x").label, Polarity::Neutral);
        assert_eq!(at(-0.11).score("x").label, Polarity::Negative);
    }

    #[test]
    fn test_failures_degrade_to_neutral() {
        let config = SentimentConfig::default();

        let failing = SentimentScorer::with_model(Arc::new(FailingModel), config.clone());
        assert_eq!(failing.score("anything"), SentimentResult::neutral());

        let nan = SentimentScorer::with_model(Arc::new(NanModel), config);
        assert_eq!(nan.score("anything"), SentimentResult::neutral());
    }

    #[test]
    fn test_custom_thresholds() {
        let config = SentimentConfig {
            positive_threshold: 0.5,
            negative_threshold: -0.5,
        };
        let scorer = SentimentScorer::with_model(Arc::new(FixedModel(0.3)), config);

        let result = scorer.score("x");
        assert_eq!(result.label, Polarity::Neutral);
        assert_eq!(result.score, 0.3);
    }
}
