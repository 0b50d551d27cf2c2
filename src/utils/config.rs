//! Configuration management
//!
//! Every value defaults to the constants the pipeline was tuned with, so an
//! empty or missing file yields the stock behavior.

use crate::defaults;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Location of the trained artifacts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    pub dir: PathBuf,
    pub vectorizer_file: String,
    pub model_file: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            vectorizer_file: "vectorizer.bin".to_string(),
            model_file: "fake_news_model.bin".to_string(),
        }
    }
}

impl ArtifactConfig {
    pub fn vectorizer_path(&self) -> PathBuf {
        self.dir.join(&self.vectorizer_file)
    }

    pub fn model_path(&self) -> PathBuf {
        self.dir.join(&self.model_file)
    }
}

/// Keyword classifier confidence curve: `min(max, base + step * hits)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    pub base_confidence: f64,
    pub confidence_step: f64,
    pub max_confidence: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            base_confidence: defaults::BASE_CONFIDENCE,
            confidence_step: defaults::CONFIDENCE_STEP,
            max_confidence: defaults::MAX_CONFIDENCE,
        }
    }
}

/// Polarity dead zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    pub positive_threshold: f64,
    pub negative_threshold: f64,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            positive_threshold: defaults::POSITIVE_THRESHOLD,
            negative_threshold: defaults::NEGATIVE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    pub max_entities: usize,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            max_entities: defaults::MAX_ENTITIES,
        }
    }
}

/// Domains added to the built-in trust lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustConfig {
    pub trusted_domains: Vec<String>,
    pub unreliable_domains: Vec<String>,
}

/// Classifier family written by the trainer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    Logistic,
    NaiveBayes,
}

/// Offline training hyperparameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub model: ModelKind,
    pub max_features: usize,
    pub ngram_min: usize,
    pub ngram_max: usize,
    pub min_df: usize,
    pub max_df: f64,
    /// Inverse regularization strength
    pub c: f64,
    pub learning_rate: f64,
    pub max_iter: usize,
    pub tolerance: f64,
    /// Laplace smoothing for naive Bayes
    pub alpha: f64,
    pub test_size: f64,
    pub seed: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            model: ModelKind::Logistic,
            max_features: defaults::MAX_FEATURES,
            ngram_min: 1,
            ngram_max: 2,
            min_df: 1,
            max_df: 0.9,
            c: 1.0,
            learning_rate: 0.5,
            max_iter: 1000,
            tolerance: 1e-6,
            alpha: 1.0,
            test_size: defaults::TEST_SIZE,
            seed: defaults::SEED,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub artifacts: ArtifactConfig,
    pub heuristic: HeuristicConfig,
    pub sentiment: SentimentConfig,
    pub entities: EntityConfig,
    pub trust: TrustConfig,
    pub training: TrainingConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file or use default
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) if path.as_ref().exists() => {
                tracing::warn!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "configuration file rejected, using defaults"
                );
                Config::default()
            }
            Err(e) => {
                tracing::debug!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "using default configuration"
                );
                Config::default()
            }
        }
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Create default configuration file
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<()> {
        Config::default().save(path)
    }

    /// Reject values the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        let h = &self.heuristic;
        if !(0.0..=1.0).contains(&h.base_confidence)
            || !(0.0..=1.0).contains(&h.max_confidence)
            || h.base_confidence > h.max_confidence
            || h.confidence_step < 0.0
        {
            return Err(Error::ConfigError(
                "heuristic confidences must satisfy 0 <= base <= max <= 1 and step >= 0".to_string(),
            ));
        }

        if self.sentiment.negative_threshold > self.sentiment.positive_threshold {
            return Err(Error::ConfigError(
                "sentiment negative_threshold must not exceed positive_threshold".to_string(),
            ));
        }

        if !(1..=defaults::MAX_ENTITIES).contains(&self.entities.max_entities) {
            return Err(Error::ConfigError(format!(
                "entities max_entities must be in 1..={}",
                defaults::MAX_ENTITIES
            )));
        }

        let t = &self.training;
        if t.ngram_min == 0 || t.ngram_min > t.ngram_max {
            return Err(Error::ConfigError(
                "training n-gram range must satisfy 1 <= ngram_min <= ngram_max".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&t.test_size) {
            return Err(Error::ConfigError(
                "training test_size must be in [0, 1)".to_string(),
            ));
        }
        if t.max_df <= 0.0 || t.max_df > 1.0 || t.c <= 0.0 || t.alpha <= 0.0 {
            return Err(Error::ConfigError(
                "training max_df must be in (0, 1]; c and alpha must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.heuristic.max_confidence, 0.9);
        assert_eq!(config.sentiment.positive_threshold, 0.1);
        assert_eq!(config.entities.max_entities, 10);
        assert_eq!(config.artifacts.model_file, "fake_news_model.bin");
        assert_eq!(config.training.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: Config = toml::from_str(
            r#"
            [entities]
            max_entities = 5

            [training]
            model = "naive-bayes"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.entities.max_entities, 5);
        assert_eq!(parsed.training.model, ModelKind::NaiveBayes);
        assert_eq!(parsed.training.max_features, 5000);
        assert_eq!(parsed.heuristic, HeuristicConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.trust.trusted_domains.push("apnews.com".to_string());

        config.save(file.path()).unwrap();
        let loaded = Config::load(file.path()).unwrap();
        assert_eq!(loaded.trust.trusted_domains, vec!["apnews.com".to_string()]);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        config.heuristic.base_confidence = 0.95;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.training.ngram_min = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_entity_cap_bounds() {
        let mut config = Config::default();
        config.entities.max_entities = 50;
        assert!(config.validate().is_err());

        config.entities.max_entities = 0;
        assert!(config.validate().is_err());

        config.entities.max_entities = 3;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_or_default_rejected_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[entities]\nmax_entities = 50\n").unwrap();

        assert!(Config::load(file.path()).is_err());
        assert_eq!(Config::load_or_default(file.path()), Config::default());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default("/nonexistent/article_trust.toml");
        assert_eq!(config, Config::default());
    }
}
