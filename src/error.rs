//! Error types for the article trust library

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration: {0}")]
    TomlDeError(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Failed to serialize configuration: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    /// Artifact blob could not be encoded or decoded
    #[error("Artifact encoding error: {0}")]
    BincodeError(#[from] bincode::Error),

    /// Dataset CSV error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Training could not complete
    #[error("Training error: {0}")]
    TrainingError(String),

    /// Statistical classifier cannot answer
    #[error(transparent)]
    Model(#[from] ClassifierUnavailable),

    /// Named-entity recognizer failed
    #[error("Entity recognizer error: {0}")]
    RecognizerError(String),

    /// Sentiment model failed
    #[error("Sentiment model error: {0}")]
    SentimentError(String),
}

/// Reasons the statistical classifier cannot produce a prediction.
///
/// Never surfaced to callers of the analysis pipeline: the orchestrator
/// answers with the heuristic classifier instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierUnavailable {
    /// No artifacts were loaded at startup
    #[error("Trained artifacts are not loaded: {0}")]
    NotLoaded(String),

    /// Vectorizer and classifier disagree on the feature space
    #[error("Incompatible feature shape: expected {expected}, got {got}")]
    Incompatible { expected: usize, got: usize },

    /// Classifier emitted a label outside {Real, Fake}
    #[error("Unknown class label: {0}")]
    UnknownLabel(String),

    /// Probability vector is empty, non-finite or zero
    #[error("Invalid class probabilities")]
    InvalidProbabilities,

    /// Model has not been fitted
    #[error("Model has not been fitted yet")]
    NotFitted,

    /// Any other model failure
    #[error("Model failure: {0}")]
    Model(String),
}
