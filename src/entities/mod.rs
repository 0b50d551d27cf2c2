//! Named-entity extraction
//!
//! Includes:
//! - The recognizer trait and a rule/gazetteer recognizer
//! - The extractor used by the analysis pipeline (capping, failure handling)

mod extractor;
mod recognizer;

pub use extractor::EntityExtractor;
pub use recognizer::{RuleBasedRecognizer, DATE, GPE, LOC, MONEY, NORP, ORG, PERCENT, PERSON};

use crate::error::Result;
use crate::models::Entity;

/// Finds named spans in raw text, in order of appearance
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>>;
}
