//! Integration tests for article trust analysis

use article_trust::{
    // Pipeline
    ArticleAnalyzer, AnalysisInput, AnalysisResult,
    // Classifiers
    classifier::{sample_dataset, ArtifactRegistry, HeuristicClassifier, Trainer},
    // Results
    Entity, Polarity, Prediction, TrustTier,
    // Utils
    normalize, Config, TrustRater,
};
use std::sync::Arc;

fn trained_config(dir: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.artifacts.dir = dir.to_path_buf();

    let outcome = Trainer::new(config.training.clone())
        .train(&sample_dataset())
        .expect("training on the sample corpus");
    outcome
        .artifacts
        .save(&config.artifacts)
        .expect("saving artifacts");

    config
}

mod pipeline {
    use super::*;

    #[test]
    fn test_empty_article() {
        let analyzer = ArticleAnalyzer::default();

        for url in [None, Some("https://bbc.com/news/1"), Some("::::")] {
            let result = analyzer.analyze("", url);
            assert_eq!(result.prediction, Prediction::Unknown);
            assert_eq!(result.confidence, 0.0);
            assert_eq!(result.sentiment, Polarity::Neutral);
            assert_eq!(result.sentiment_score, 0.0);
            assert!(result.entities.is_empty());
            assert_eq!(result.trust_score, TrustTier::Unknown);
        }
    }

    #[test]
    fn test_clickbait_from_unreliable_source() {
        let analyzer = ArticleAnalyzer::default();
        let result = analyzer.analyze(
            "SHOCKING: Doctors hate this miracle cure! Click here for the secret.",
            Some("https://infowars.com/health/123"),
        );

        assert_eq!(result.prediction, Prediction::Fake);
        assert!((result.confidence - 0.9).abs() < 1e-12, "five hits saturate the confidence");
        assert_eq!(result.trust_score, TrustTier::Low);
    }

    #[test]
    fn test_result_report() {
        let result = AnalysisResult {
            prediction: Prediction::Real,
            confidence: 0.8,
            sentiment: Polarity::Positive,
            sentiment_score: 0.32,
            entities: vec![Entity::new("Nature", "ORG"), Entity::new("London", "GPE")],
            trust_score: TrustTier::High,
        };

        assert_eq!(result.entities_joined(), "Nature (ORG), London (GPE)");

        let report = result.to_string();
        assert!(report.contains("Prediction: Real"));
        assert!(report.contains("Confidence: 0.80"));
        assert!(report.contains("Entities: Nature (ORG), London (GPE)"));
        assert!(report.ends_with("Trust Score: High"));
    }

    #[test]
    fn test_result_serializes_entity_type_key() {
        let result = ArticleAnalyzer::default().analyze("Officials in Paris confirmed the report.", None);
        let json = serde_json::to_value(&result).expect("serializable");

        assert_eq!(json["entities"][0]["text"], "Paris");
        assert_eq!(json["entities"][0]["type"], "GPE");
        assert_eq!(json["prediction"], "Real");
    }

    #[test]
    fn test_concurrent_analysis() {
        let analyzer = Arc::new(ArticleAnalyzer::default());
        let inputs = vec![
            AnalysisInput::new("Scientists published a study in Nature.").with_url("https://reuters.com/a"),
            AnalysisInput::new("You won't believe this conspiracy!").with_url("https://breitbart.com/b"),
            AnalysisInput::new("The weather was mild on Tuesday."),
        ];
        let expected = analyzer.analyze_batch(&inputs);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let analyzer = Arc::clone(&analyzer);
                    let inputs = &inputs;
                    scope.spawn(move || analyzer.analyze_batch(inputs))
                })
                .collect();

            for handle in handles {
                assert_eq!(handle.join().expect("worker panicked"), expected);
            }
        });
    }
}

mod classification {
    use super::*;

    #[test]
    fn test_normalize_idempotent() {
        for text in [
            "BREAKING!!! Aliens land in 2024...",
            "  mixed\tCase  text ",
            "",
            "123 !!!",
        ] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once);
            assert!(once.chars().all(|c| c.is_ascii_lowercase() || c.is_whitespace()));
        }
    }

    #[test]
    fn test_heuristic_symmetry_and_bounds() {
        let heuristic = HeuristicClassifier::new();

        let balanced = heuristic.classify("Breaking: new study released");
        assert_eq!(balanced.label, Prediction::Uncertain);
        assert_eq!(balanced.confidence, 0.5);

        let fake = heuristic.classify("A miracle secret");
        let real = heuristic.classify("A study and research");
        assert_eq!(fake.label, Prediction::Fake);
        assert_eq!(real.label, Prediction::Real);
        assert_eq!(fake.confidence, real.confidence);

        for text in [
            "miracle",
            "miracle secret aliens overnight guaranteed instant",
            "research",
            "according to the study published in the journal, scientists say the data shows",
        ] {
            let result = heuristic.classify(text);
            assert!(result.confidence >= 0.5 && result.confidence <= 0.9, "{text}");
        }
    }

    #[test]
    fn test_fallback_matches_heuristic_without_artifacts() {
        let analyzer = ArticleAnalyzer::default();
        let heuristic = HeuristicClassifier::new();
        assert!(!analyzer.has_trained_model());

        for text in [
            "Government announces new local infrastructure plan.",
            "One weird trick big pharma doesn't want you to know",
            "Nothing to see here",
        ] {
            assert_eq!(analyzer.classify(text), heuristic.classify(text));
        }
    }

    #[test]
    fn test_trained_model_is_used_after_loading() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = trained_config(dir.path());

        let registry = ArtifactRegistry::load(&config.artifacts);
        assert!(registry.is_loaded());

        let analyzer = ArticleAnalyzer::new(&config, Arc::new(registry));
        assert!(analyzer.has_trained_model());

        let result = analyzer.analyze(
            "Miracle cure discovered: doctors hate this one simple trick!",
            Some("https://naturalnews.com/x"),
        );
        assert!(matches!(result.prediction, Prediction::Real | Prediction::Fake));
        assert!(result.confidence > 0.0 && result.confidence <= 1.0);
        assert_eq!(result.trust_score, TrustTier::Low);
    }

    #[test]
    fn test_missing_artifacts_fall_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = Config::default();
        config.artifacts.dir = dir.path().join("absent");

        let analyzer = ArticleAnalyzer::from_config(&config);
        assert!(!analyzer.has_trained_model());

        let result = analyzer.analyze("Local officials published the annual report.", None);
        assert_eq!(result.prediction, Prediction::Real);
    }
}

mod enrichment {
    use super::*;

    #[test]
    fn test_entities_capped_in_order() {
        let result = ArticleAnalyzer::default().analyze(
            "Delegates from France, Germany, Italy, Spain, Portugal, Belgium, Austria, \
             Sweden, Norway, Denmark, Finland and Poland met in Brussels.",
            None,
        );

        assert_eq!(result.entities.len(), 10);
        assert_eq!(result.entities[0], Entity::new("France", "GPE"));
        assert_eq!(result.entities[9], Entity::new("Denmark", "GPE"));
    }

    #[test]
    fn test_configured_cap_cannot_exceed_ten() {
        let mut config = Config::default();
        config.entities.max_entities = 50;
        assert!(config.validate().is_err());

        let analyzer = ArticleAnalyzer::from_config(&config);
        let result = analyzer.analyze(
            "Delegates from France, Germany, Italy, Spain, Portugal, Belgium, Austria, \
             Sweden, Norway, Denmark, Finland and Poland met in Brussels.",
            None,
        );
        assert_eq!(result.entities.len(), 10);
    }

    #[test]
    fn test_sentiment_labels() {
        let analyzer = ArticleAnalyzer::default();

        let positive = analyzer.analyze("The results were excellent and the outlook is great.", None);
        assert_eq!(positive.sentiment, Polarity::Positive);
        assert!(positive.sentiment_score > 0.1 && positive.sentiment_score <= 1.0);

        let negative = analyzer.analyze("A terrible and shocking failure.", None);
        assert_eq!(negative.sentiment, Polarity::Negative);
        assert!(negative.sentiment_score < -0.1 && negative.sentiment_score >= -1.0);
    }

    #[test]
    fn test_trust_tiers() {
        let rater = TrustRater::default();

        assert_eq!(rater.rate_url(Some("https://reuters.com/world")), TrustTier::High);
        assert_eq!(rater.rate_url(Some("https://infowars.com/x")), TrustTier::Low);
        assert_eq!(rater.rate_url(Some("https://example.org/x")), TrustTier::Medium);
        assert_eq!(rater.rate_url(Some("https://www.bbc.com/news")), TrustTier::Medium);
        assert_eq!(rater.rate_url(None), TrustTier::Unknown);
        assert_eq!(rater.rate_url(Some("not a url")), TrustTier::Unknown);
    }

    #[test]
    fn test_configured_trust_lists() {
        let mut config = Config::default();
        config.trust.trusted_domains.push("apnews.com".to_string());

        let analyzer = ArticleAnalyzer::from_config(&config);
        let result = analyzer.analyze("Report text.", Some("https://apnews.com/article/1"));
        assert_eq!(result.trust_score, TrustTier::High);
    }
}
