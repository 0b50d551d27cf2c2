//! Utility module
//!
//! This module provides:
//! - Configuration management
//! - Logging setup

mod config;
mod logging;

pub use config::{
    ArtifactConfig, Config, EntityConfig, HeuristicConfig, LoggingConfig, ModelKind,
    SentimentConfig, TrainingConfig, TrustConfig,
};
pub use logging::setup_logging;
