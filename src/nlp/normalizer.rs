//! Text normalization
//!
//! `normalize` defines the feature space of the trained classifier: training
//! and prediction both go through it, so any change here requires retraining.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static ARTICLE_NOISE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.,!?;:\-()]").expect("valid regex"));

/// Prepare text for the statistical classifier.
///
/// Lowercases, keeps only `a-z` and whitespace, collapses whitespace runs to a
/// single space and trims. Lossy and idempotent.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let letters: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    letters.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Light cleanup of extracted article text before it enters the pipeline.
///
/// Keeps word characters and basic punctuation, which the sentiment scorer and
/// the entity recognizer still need.
pub fn clean_article_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let collapsed = WHITESPACE_REGEX.replace_all(text, " ");
    let cleaned = ARTICLE_NOISE_REGEX.replace_all(&collapsed, "");
    cleaned.trim().to_string()
}
