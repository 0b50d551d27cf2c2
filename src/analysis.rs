//! Article analysis pipeline
//!
//! Composes classification, sentiment, entity extraction and trust rating
//! into one [`AnalysisResult`]. Nothing here fails: every stage degrades to
//! a default instead.

use crate::classifier::{ArtifactRegistry, HeuristicClassifier, StatisticalClassifier};
use crate::entities::{EntityExtractor, EntityRecognizer};
use crate::models::{AnalysisInput, AnalysisResult, ClassificationResult};
use crate::sentiment::{SentimentModel, SentimentScorer};
use crate::trust::{domain_from_url, TrustRater};
use crate::utils::Config;
use std::sync::Arc;

/// Shareable analysis pipeline.
///
/// Holds only read-only state, so one instance can serve any number of
/// threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ArticleAnalyzer {
    statistical: StatisticalClassifier,
    heuristic: HeuristicClassifier,
    sentiment: SentimentScorer,
    entities: EntityExtractor,
    trust: TrustRater,
}

impl ArticleAnalyzer {
    pub fn new(config: &Config, registry: Arc<ArtifactRegistry>) -> Self {
        Self {
            statistical: StatisticalClassifier::new(registry),
            heuristic: HeuristicClassifier::with_config(config.heuristic.clone()),
            sentiment: SentimentScorer::new(config.sentiment.clone()),
            entities: EntityExtractor::new(&config.entities),
            trust: TrustRater::new(&config.trust),
        }
    }

    /// Load the artifacts named in `config` and build the pipeline
    pub fn from_config(config: &Config) -> Self {
        let registry = Arc::new(ArtifactRegistry::load(&config.artifacts));
        Self::new(config, registry)
    }

    /// Replace the named-entity recognizer
    pub fn with_recognizer(mut self, recognizer: Arc<dyn EntityRecognizer>, config: &Config) -> Self {
        self.entities = EntityExtractor::with_recognizer(recognizer, &config.entities);
        self
    }

    /// Replace the sentiment model
    pub fn with_sentiment_model(mut self, model: Arc<dyn SentimentModel>, config: &Config) -> Self {
        self.sentiment = SentimentScorer::with_model(model, config.sentiment.clone());
        self
    }

    pub fn has_trained_model(&self) -> bool {
        self.statistical.is_available()
    }

    /// Fake/real verdict: trained model when available, keyword heuristic otherwise
    pub fn classify(&self, text: &str) -> ClassificationResult {
        self.statistical.classify_or_fallback(text, &self.heuristic)
    }

    /// Analyze one article
    pub fn analyze(&self, text: &str, url: Option<&str>) -> AnalysisResult {
        if text.is_empty() {
            return AnalysisResult::empty();
        }

        let domain = url.and_then(domain_from_url);
        let classification = self.classify(text);
        let sentiment = self.sentiment.score(text);
        let entities = self.entities.extract(text);
        let trust_score = self.trust.rate(domain.as_deref());

        tracing::debug!(
            prediction = %classification.label,
            confidence = classification.confidence,
            sentiment = %sentiment.label,
            entities = entities.len(),
            trust = %trust_score,
            "article analyzed"
        );

        AnalysisResult {
            prediction: classification.label,
            confidence: classification.confidence,
            sentiment: sentiment.label,
            sentiment_score: sentiment.score,
            entities,
            trust_score,
        }
    }

    pub fn analyze_input(&self, input: &AnalysisInput) -> AnalysisResult {
        self.analyze(&input.text, input.source_url.as_deref())
    }

    pub fn analyze_batch(&self, inputs: &[AnalysisInput]) -> Vec<AnalysisResult> {
        inputs.iter().map(|input| self.analyze_input(input)).collect()
    }
}

impl Default for ArticleAnalyzer {
    /// Stock configuration with no trained artifacts
    fn default() -> Self {
        Self::new(&Config::default(), Arc::new(ArtifactRegistry::empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::models::{Entity, Polarity, Prediction, TrustTier};
    use approx::assert_relative_eq;

    struct Unreachable;

    impl EntityRecognizer for Unreachable {
        fn recognize(&self, _text: &str) -> Result<Vec<Entity>> {
            panic!("recognizer must not run on empty text");
        }
    }

    impl SentimentModel for Unreachable {
        fn polarity(&self, _text: &str) -> Result<f64> {
            panic!("sentiment model must not run on empty text");
        }
    }

    struct Broken;

    impl EntityRecognizer for Broken {
        fn recognize(&self, _text: &str) -> Result<Vec<Entity>> {
            Err(Error::RecognizerError("broken".to_string()))
        }
    }

    impl SentimentModel for Broken {
        fn polarity(&self, _text: &str) -> Result<f64> {
            Err(Error::SentimentError("broken".to_string()))
        }
    }

    #[test]
    fn test_empty_text_short_circuits() {
        let config = Config::default();
        let analyzer = ArticleAnalyzer::default()
            .with_recognizer(Arc::new(Unreachable), &config)
            .with_sentiment_model(Arc::new(Unreachable), &config);

        for url in [None, Some("https://reuters.com/x"), Some("nonsense")] {
            assert_eq!(analyzer.analyze("", url), AnalysisResult::empty());
        }
    }

    #[test]
    fn test_full_analysis_without_model() {
        let analyzer = ArticleAnalyzer::default();
        let result = analyzer.analyze(
            "New study published in Nature journal shows promising results.",
            Some("https://reuters.com/science/1"),
        );

        assert_eq!(result.prediction, Prediction::Real);
        assert_relative_eq!(result.confidence, 0.8, epsilon = 1e-12);
        assert_eq!(result.sentiment, Polarity::Positive);
        assert_eq!(result.entities, vec![Entity::new("Nature", "ORG")]);
        assert_eq!(result.trust_score, TrustTier::High);
    }

    #[test]
    fn test_stage_failures_degrade() {
        let config = Config::default();
        let analyzer = ArticleAnalyzer::default()
            .with_recognizer(Arc::new(Broken), &config)
            .with_sentiment_model(Arc::new(Broken), &config);

        let result = analyzer.analyze("Shocking secret revealed in London", None);
        assert_eq!(result.prediction, Prediction::Fake);
        assert_eq!(result.sentiment, Polarity::Neutral);
        assert_eq!(result.sentiment_score, 0.0);
        assert!(result.entities.is_empty());
        assert_eq!(result.trust_score, TrustTier::Unknown);
    }

    #[test]
    fn test_text_without_letters_is_not_empty() {
        let result = ArticleAnalyzer::default().analyze("123 !!!", Some("https://example.org"));
        assert_eq!(result.prediction, Prediction::Uncertain);
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.trust_score, TrustTier::Medium);
    }

    #[test]
    fn test_batch_matches_single() {
        let analyzer = ArticleAnalyzer::default();
        let inputs = vec![
            AnalysisInput::new("Doctors hate this one weird trick").with_url("https://infowars.com/a"),
            AnalysisInput::new(""),
        ];

        let results = analyzer.analyze_batch(&inputs);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], analyzer.analyze_input(&inputs[0]));
        assert_eq!(results[0].trust_score, TrustTier::Low);
        assert_eq!(results[1], AnalysisResult::empty());
    }

    #[test]
    fn test_analyzer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ArticleAnalyzer>();
    }
}
