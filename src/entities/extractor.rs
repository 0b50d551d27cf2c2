use super::{EntityRecognizer, RuleBasedRecognizer};
use crate::defaults::MAX_ENTITIES;
use crate::models::Entity;
use crate::utils::EntityConfig;
use std::fmt;
use std::sync::Arc;

/// Runs a recognizer and keeps the first `max_entities` spans it emits,
/// never more than [`MAX_ENTITIES`].
///
/// Recognizer failures are logged and reported as no entities.
#[derive(Clone)]
pub struct EntityExtractor {
    recognizer: Arc<dyn EntityRecognizer>,
    max_entities: usize,
}

impl EntityExtractor {
    pub fn new(config: &EntityConfig) -> Self {
        Self::with_recognizer(Arc::new(RuleBasedRecognizer::new()), config)
    }

    pub fn with_recognizer(recognizer: Arc<dyn EntityRecognizer>, config: &EntityConfig) -> Self {
        Self {
            recognizer,
            max_entities: config.max_entities.min(MAX_ENTITIES),
        }
    }

    pub fn extract(&self, text: &str) -> Vec<Entity> {
        if text.is_empty() {
            return Vec::new();
        }

        match self.recognizer.recognize(text) {
            Ok(mut entities) => {
                entities.truncate(self.max_entities);
                entities
            }
            Err(e) => {
                tracing::warn!(error = %e, "entity recognizer failed");
                Vec::new()
            }
        }
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new(&EntityConfig::default())
    }
}

impl fmt::Debug for EntityExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityExtractor")
            .field("max_entities", &self.max_entities)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};

    struct FailingRecognizer;

    impl EntityRecognizer for FailingRecognizer {
        fn recognize(&self, _text: &str) -> Result<Vec<Entity>> {
            Err(Error::RecognizerError("pipeline not loaded".to_string()))
        }
    }

    /// Emits one entity per whitespace-separated word, duplicates included
    struct EveryWord;

    impl EntityRecognizer for EveryWord {
        fn recognize(&self, text: &str) -> Result<Vec<Entity>> {
            Ok(text
                .split_whitespace()
                .map(|w| Entity::new(w, "ORG"))
                .collect())
        }
    }

    #[test]
    fn test_empty_text() {
        assert!(EntityExtractor::default().extract("").is_empty());
    }

    #[test]
    fn test_caps_in_emission_order() {
        let extractor =
            EntityExtractor::with_recognizer(Arc::new(EveryWord), &EntityConfig::default());
        let text = "a b c d e f g h i j k l a";

        let entities = extractor.extract(text);
        assert_eq!(entities.len(), 10);
        assert_eq!(entities[0].text, "a");
        assert_eq!(entities[9].text, "j");
    }

    #[test]
    fn test_keeps_duplicates() {
        let extractor =
            EntityExtractor::with_recognizer(Arc::new(EveryWord), &EntityConfig::default());
        let entities = extractor.extract("NASA NASA");
        assert_eq!(entities, vec![Entity::new("NASA", "ORG"), Entity::new("NASA", "ORG")]);
    }

    #[test]
    fn test_custom_cap() {
        let config = EntityConfig { max_entities: 2 };
        let extractor = EntityExtractor::with_recognizer(Arc::new(EveryWord), &config);
        assert_eq!(extractor.extract("x y z").len(), 2);
    }

    #[test]
    fn test_cap_never_exceeds_ten() {
        let config = EntityConfig { max_entities: 50 };
        let extractor = EntityExtractor::with_recognizer(Arc::new(EveryWord), &config);
        assert_eq!(extractor.extract("a b c d e f g h i j k l m").len(), 10);

        let entities = EntityExtractor::new(&config).extract(
            "Delegates from France, Germany, Italy, Spain, Portugal, Belgium, Austria, \
             Sweden, Norway, Denmark, Finland and Poland met in Brussels.",
        );
        assert_eq!(entities.len(), 10);
    }

    #[test]
    fn test_failure_is_empty() {
        let extractor =
            EntityExtractor::with_recognizer(Arc::new(FailingRecognizer), &EntityConfig::default());
        assert!(extractor.extract("Apple and Google").is_empty());
    }

    #[test]
    fn test_default_recognizer() {
        let entities = EntityExtractor::default()
            .extract("Officials in London and Berlin met NATO representatives.");
        let texts: Vec<&str> = entities.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["London", "Berlin", "NATO"]);
    }
}
