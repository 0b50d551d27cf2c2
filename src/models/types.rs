//! Data types for article analysis

use crate::defaults;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Article handed to the pipeline by the scraping/upload collaborator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// Decoded article text (may be empty)
    pub text: String,
    /// URL the article was retrieved from
    #[serde(default)]
    pub source_url: Option<String>,
}

impl AnalysisInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }
}

/// Credibility verdict for an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prediction {
    /// Likely legitimate
    Real,
    /// Likely fabricated
    Fake,
    /// Signals are balanced
    Uncertain,
    /// Nothing to judge
    Unknown,
}

impl Prediction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prediction::Real => "Real",
            Prediction::Fake => "Fake",
            Prediction::Uncertain => "Uncertain",
            Prediction::Unknown => "Unknown",
        }
    }

    /// Parse a class label emitted by a trained classifier.
    ///
    /// Only the binary label space of the artifacts is accepted.
    pub fn from_class_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "real" => Some(Prediction::Real),
            "fake" => Some(Prediction::Fake),
            _ => None,
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label and self-reported certainty from a classifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: Prediction,
    /// Confidence in the top label (0.0 - 1.0)
    pub confidence: f64,
}

impl ClassificationResult {
    pub fn new(label: Prediction, confidence: f64) -> Self {
        Self { label, confidence }
    }
}

/// Sentiment polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Positive sentiment
    Positive,
    /// Neutral sentiment
    Neutral,
    /// Negative sentiment
    Negative,
}

impl Polarity {
    /// Discretize a polarity score with the default dead zone
    pub fn from_score(score: f64) -> Self {
        Self::from_score_with_thresholds(
            score,
            defaults::POSITIVE_THRESHOLD,
            defaults::NEGATIVE_THRESHOLD,
        )
    }

    pub fn from_score_with_thresholds(score: f64, positive: f64, negative: f64) -> Self {
        if score > positive {
            Polarity::Positive
        } else if score < negative {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "Positive",
            Polarity::Neutral => "Neutral",
            Polarity::Negative => "Negative",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment analysis result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Polarity label
    pub label: Polarity,
    /// Score from -1.0 to 1.0
    pub score: f64,
}

impl SentimentResult {
    pub fn neutral() -> Self {
        Self {
            label: Polarity::Neutral,
            score: 0.0,
        }
    }
}

/// Named span and its semantic category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Surface text as it appears in the article
    pub text: String,
    /// Category label (PERSON, ORG, GPE, ...)
    #[serde(rename = "type")]
    pub entity_type: String,
}

impl Entity {
    pub fn new(text: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entity_type: entity_type.into(),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text, self.entity_type)
    }
}

/// Domain-level reputation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrustTier {
    High,
    Medium,
    Low,
    Unknown,
}

impl TrustTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrustTier::High => "High",
            TrustTier::Medium => "Medium",
            TrustTier::Low => "Low",
            TrustTier::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TrustTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combined credibility assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub prediction: Prediction,
    pub confidence: f64,
    pub sentiment: Polarity,
    pub sentiment_score: f64,
    pub entities: Vec<Entity>,
    pub trust_score: TrustTier,
}

impl AnalysisResult {
    /// Result for an article with no text
    pub fn empty() -> Self {
        Self {
            prediction: Prediction::Unknown,
            confidence: 0.0,
            sentiment: Polarity::Neutral,
            sentiment_score: 0.0,
            entities: Vec::new(),
            trust_score: TrustTier::Unknown,
        }
    }

    /// Entities in the flat stored form: `"text (type), text (type)"`
    pub fn entities_joined(&self) -> String {
        self.entities
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Prediction: {}", self.prediction)?;
        writeln!(f, "Confidence: {:.2}", self.confidence)?;
        writeln!(f, "Sentiment: {}", self.sentiment)?;
        writeln!(f, "Sentiment Score: {:.2}", self.sentiment_score)?;
        writeln!(f, "Entities: {}", self.entities_joined())?;
        write!(f, "Trust Score: {}", self.trust_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_dead_zone() {
        assert_eq!(Polarity::from_score(0.1), Polarity::Neutral);
        assert_eq!(Polarity::from_score(-0.1), Polarity::Neutral);
        assert_eq!(Polarity::from_score(0.11), Polarity::Positive);
        assert_eq!(Polarity::from_score(-0.11), Polarity::Negative);

        let just_above = defaults::POSITIVE_THRESHOLD + 1e-9;
        let just_below = defaults::NEGATIVE_THRESHOLD - 1e-9;
        assert_eq!(Polarity::from_score(just_above), Polarity::Positive);
        assert_eq!(Polarity::from_score(just_below), Polarity::Negative);
    }

    #[test]
    fn test_class_label_parsing() {
        assert_eq!(Prediction::from_class_label("Fake"), Some(Prediction::Fake));
        assert_eq!(Prediction::from_class_label("REAL"), Some(Prediction::Real));
        assert_eq!(Prediction::from_class_label("Uncertain"), None);
    }

    #[test]
    fn test_entities_joined() {
        let mut result = AnalysisResult::empty();
        assert_eq!(result.entities_joined(), "");

        result.entities = vec![
            Entity::new("Nature", "ORG"),
            Entity::new("Paris", "GPE"),
        ];
        assert_eq!(result.entities_joined(), "Nature (ORG), Paris (GPE)");
    }

    #[test]
    fn test_entity_serializes_type_field() {
        let json = serde_json::to_string(&Entity::new("NASA", "ORG")).unwrap();
        assert_eq!(json, r#"{"text":"NASA","type":"ORG"}"#);
    }

    #[test]
    fn test_report_format() {
        let result = AnalysisResult {
            prediction: Prediction::Fake,
            confidence: 0.7,
            sentiment: Polarity::Positive,
            sentiment_score: 0.25,
            entities: vec![Entity::new("NASA", "ORG")],
            trust_score: TrustTier::Medium,
        };
        let report = result.to_string();

        assert!(report.contains("Prediction: Fake"));
        assert!(report.contains("Confidence: 0.70"));
        assert!(report.contains("Entities: NASA (ORG)"));
        assert!(report.ends_with("Trust Score: Medium"));
    }
}
