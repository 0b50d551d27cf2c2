//! Data models

mod types;

pub use types::{
    AnalysisInput, AnalysisResult, ClassificationResult, Entity, Polarity, Prediction,
    SentimentResult, TrustTier,
};
