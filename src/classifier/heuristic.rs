//! Keyword heuristic classifier
//!
//! Always-available baseline that needs no trained state. Counts which
//! sensationalist and attribution phrases occur in the text.

use crate::models::{ClassificationResult, Prediction};
use crate::nlp::normalize;
use crate::utils::HeuristicConfig;

/// Sensationalist and clickbait markers
pub const FAKE_INDICATORS: &[&str] = &[
    "breaking",
    "shocking",
    "miracle",
    "secret",
    "conspiracy",
    "you won't believe",
    "click here",
    "one weird trick",
    "doctors hate",
    "big pharma",
    "government hiding",
    "guaranteed",
    "overnight",
    "instant",
    "cure cancer",
    "aliens",
    "ancient secret",
    "transform your life",
];

/// Institutional and attribution markers
pub const REAL_INDICATORS: &[&str] = &[
    "study",
    "research",
    "published",
    "journal",
    "scientists",
    "government announces",
    "local",
    "official",
    "report",
    "according to",
    "experts say",
    "data shows",
    "analysis",
];

/// Indicator hits for one text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorCounts {
    pub fake: usize,
    pub real: usize,
}

#[derive(Debug, Clone)]
pub struct HeuristicClassifier {
    fake_indicators: Vec<String>,
    real_indicators: Vec<String>,
    config: HeuristicConfig,
}

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self::with_config(HeuristicConfig::default())
    }

    pub fn with_config(config: HeuristicConfig) -> Self {
        // Phrases live in the same space as the text they are matched against
        let prepare = |phrases: &[&str]| -> Vec<String> {
            phrases
                .iter()
                .map(|p| normalize(p))
                .filter(|p| !p.is_empty())
                .collect()
        };

        Self {
            fake_indicators: prepare(FAKE_INDICATORS),
            real_indicators: prepare(REAL_INDICATORS),
            config,
        }
    }

    /// Count indicator phrases present in the text (presence, not frequency)
    pub fn count_indicators(&self, text: &str) -> IndicatorCounts {
        let text = normalize(text);

        let count = |phrases: &[String]| {
            phrases
                .iter()
                .filter(|phrase| text.contains(phrase.as_str()))
                .count()
        };

        IndicatorCounts {
            fake: count(&self.fake_indicators),
            real: count(&self.real_indicators),
        }
    }

    /// Classify raw or normalized text
    pub fn classify(&self, text: &str) -> ClassificationResult {
        if text.is_empty() {
            return ClassificationResult::new(Prediction::Unknown, self.config.base_confidence);
        }

        let counts = self.count_indicators(text);

        let result = if counts.fake > counts.real {
            ClassificationResult::new(Prediction::Fake, self.confidence(counts.fake))
        } else if counts.real > counts.fake {
            ClassificationResult::new(Prediction::Real, self.confidence(counts.real))
        } else {
            ClassificationResult::new(Prediction::Uncertain, self.config.base_confidence)
        };

        tracing::debug!(
            fake = counts.fake,
            real = counts.real,
            label = %result.label,
            "heuristic classification"
        );

        result
    }

    fn confidence(&self, hits: usize) -> f64 {
        (self.config.base_confidence + self.config.confidence_step * hits as f64)
            .min(self.config.max_confidence)
    }
}

impl Default for HeuristicClassifier {
    fn default() -> Self {
        Self::new()
    }
}
