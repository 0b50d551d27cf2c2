//! # Article Trust
//!
//! Trustworthiness analysis for news articles: a fake/real verdict with
//! confidence, overall sentiment, the named entities mentioned, and a
//! reputation tier for the source domain.
//!
//! ## Modules
//!
//! - `analysis` - The pipeline composing every stage
//! - `classifier` - Keyword heuristic, trained TF-IDF classifiers, training
//! - `sentiment` - Lexicon-based polarity scoring
//! - `entities` - Named-entity extraction
//! - `trust` - Source-domain reputation lookup
//! - `nlp` - Normalization, tokenization and vectorization
//! - `utils` - Configuration and logging
//!
//! ## Example Usage
//!
//! ```no_run
//! use article_trust::{ArticleAnalyzer, Config};
//!
//! let config = Config::load_or_default("config.toml");
//! let analyzer = ArticleAnalyzer::from_config(&config);
//!
//! let result = analyzer.analyze(
//!     "New study published in Nature journal shows promising results.",
//!     Some("https://reuters.com/science/article"),
//! );
//! println!("{}", result);
//! ```

pub mod analysis;
pub mod classifier;
pub mod entities;
pub mod error;
pub mod models;
pub mod nlp;
pub mod sentiment;
pub mod trust;
pub mod utils;

// Re-exports for convenience
pub use analysis::ArticleAnalyzer;
pub use classifier::{
    ArtifactRegistry, EvaluationReport, HeuristicClassifier, StatisticalClassifier,
    TrainedArtifacts, Trainer,
};
pub use entities::{EntityExtractor, EntityRecognizer, RuleBasedRecognizer};
pub use error::{ClassifierUnavailable, Error, Result};
pub use models::{
    AnalysisInput, AnalysisResult, ClassificationResult, Entity, Polarity, Prediction,
    SentimentResult, TrustTier,
};
pub use nlp::{clean_article_text, normalize};
pub use sentiment::{SentimentModel, SentimentScorer};
pub use trust::{domain_from_url, TrustRater};
pub use utils::{setup_logging, Config};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod defaults {
    /// Heuristic confidence with no indicator hits
    pub const BASE_CONFIDENCE: f64 = 0.5;

    /// Heuristic confidence gained per indicator hit
    pub const CONFIDENCE_STEP: f64 = 0.1;

    /// Heuristic confidence ceiling
    pub const MAX_CONFIDENCE: f64 = 0.9;

    /// Scores above this are positive
    pub const POSITIVE_THRESHOLD: f64 = 0.1;

    /// Scores below this are negative
    pub const NEGATIVE_THRESHOLD: f64 = -0.1;

    /// Entities kept per article
    pub const MAX_ENTITIES: usize = 10;

    /// Vocabulary size of the trained vectorizer
    pub const MAX_FEATURES: usize = 5000;

    /// Held-out share of the training corpus
    pub const TEST_SIZE: f64 = 0.2;

    /// Seed for the train/test shuffle
    pub const SEED: u64 = 42;
}
