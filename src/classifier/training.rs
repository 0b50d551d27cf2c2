//! Offline training of the statistical classifier
//!
//! Fits a TF-IDF vectorizer and a classifier on labelled texts, evaluates
//! them on a held-out split and returns artifacts ready to be saved.

use super::{
    ClassifierModel, EvaluationReport, LogisticRegression, NaiveBayesClassifier,
    ProbabilisticClassifier, TrainedArtifacts,
};
use crate::error::{Error, Result};
use crate::models::Prediction;
use crate::nlp::{normalize, TfIdf, Tokenizer, Vectorizer};
use crate::utils::{ModelKind, TrainingConfig};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::path::Path;

/// One training example
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledText {
    pub text: String,
    pub label: String,
}

impl LabeledText {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

const SAMPLE_FAKE: &[&str] = &[
    "BREAKING: Shocking discovery that will change everything! You won't believe what happened next!",
    "Scientists discover miracle cure that big pharma doesn't want you to know about!",
    "This one weird trick will solve all your problems instantly!",
    "Celebrity spotted doing something outrageous - click here to see!",
    "Government conspiracy revealed - they've been hiding this from you!",
    "Amazing weight loss secret that doctors hate!",
    "This simple home remedy cures cancer in 24 hours!",
    "Shocking video shows aliens visiting Earth - real footage!",
    "Make money fast with this guaranteed method!",
    "This ancient secret will transform your life overnight!",
];

const SAMPLE_REAL: &[&str] = &[
    "New study published in Nature journal shows promising results for renewable energy.",
    "Local government announces plans to improve public transportation infrastructure.",
    "Economic report indicates steady growth in manufacturing sector.",
    "Research team discovers new species of marine life in Pacific Ocean.",
    "Weather forecast predicts rain for the weekend with temperatures in the 60s.",
    "City council approves budget for new community center construction.",
    "Scientists develop new method for recycling plastic waste.",
    "Local business owner opens new restaurant downtown.",
    "School district announces new educational programs for students.",
    "Healthcare providers implement new safety protocols for patient care.",
];

/// Built-in bootstrap corpus: ten fake and ten real headlines
pub fn sample_dataset() -> Vec<LabeledText> {
    SAMPLE_FAKE
        .iter()
        .map(|text| LabeledText::new(*text, Prediction::Fake.as_str()))
        .chain(
            SAMPLE_REAL
                .iter()
                .map(|text| LabeledText::new(*text, Prediction::Real.as_str())),
        )
        .collect()
}

/// Load labelled texts from a CSV file (`text,label` header) or JSON Lines
/// (`.jsonl`, one `{"text": .., "label": ..}` object per line)
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledText>> {
    let path = path.as_ref();
    let is_jsonl = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("jsonl"))
        .unwrap_or(false);

    let samples = if is_jsonl {
        let file = std::fs::File::open(path)?;
        let mut samples = Vec::new();
        for line in std::io::BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            samples.push(serde_json::from_str::<LabeledText>(&line)?);
        }
        samples
    } else {
        let mut reader = csv::Reader::from_path(path)?;
        reader
            .deserialize()
            .collect::<std::result::Result<Vec<LabeledText>, csv::Error>>()?
    };

    tracing::info!(path = %path.display(), samples = samples.len(), "dataset loaded");
    Ok(samples)
}

/// Shuffle with a fixed seed and hold out `ceil(test_size * n)` samples.
///
/// Returns `(train, test)`.
pub fn train_test_split(
    samples: &[LabeledText],
    test_size: f64,
    seed: u64,
) -> (Vec<LabeledText>, Vec<LabeledText>) {
    let mut indices: Vec<usize> = (0..samples.len()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let n_test = ((samples.len() as f64) * test_size.clamp(0.0, 1.0)).ceil() as usize;
    let (test_idx, train_idx) = indices.split_at(n_test.min(samples.len()));

    let pick = |idx: &[usize]| -> Vec<LabeledText> { idx.iter().map(|&i| samples[i].clone()).collect() };
    (pick(train_idx), pick(test_idx))
}

/// Artifacts and held-out evaluation of one training run
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub artifacts: TrainedArtifacts,
    pub report: EvaluationReport,
}

/// Trains vectorizer + classifier pairs
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    config: TrainingConfig,
}

impl Trainer {
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    fn build_vectorizer(&self) -> TfIdf {
        let tokenizer = Tokenizer::new()
            .with_min_length(2)
            .with_stop_words(true)
            .with_ngram_range(self.config.ngram_min, self.config.ngram_max);

        TfIdf::new()
            .with_tokenizer(tokenizer)
            .with_min_df(self.config.min_df)
            .with_max_df(self.config.max_df)
            .with_max_features(Some(self.config.max_features))
    }

    fn fit_model(&self, features: &[Vec<f64>], labels: &[String]) -> Result<ClassifierModel> {
        let c = &self.config;
        let model = match c.model {
            ModelKind::Logistic => {
                let mut model = LogisticRegression::new(c.c, c.learning_rate, c.max_iter, c.tolerance);
                model.fit(features, labels)?;
                ClassifierModel::Logistic(model)
            }
            ModelKind::NaiveBayes => {
                let mut model = NaiveBayesClassifier::new().with_alpha(c.alpha);
                model.fit(features, labels)?;
                ClassifierModel::NaiveBayes(model)
            }
        };
        Ok(model)
    }

    /// Train on `samples` and evaluate on a held-out split
    pub fn train(&self, samples: &[LabeledText]) -> Result<TrainingOutcome> {
        // Canonical "Fake"/"Real" labels so artifacts always map back to a Prediction
        let samples = samples
            .iter()
            .map(|sample| match Prediction::from_class_label(sample.label.trim()) {
                Some(label) => Ok(LabeledText::new(sample.text.clone(), label.as_str())),
                None => Err(Error::TrainingError(format!(
                    "unsupported label '{}', expected Fake or Real",
                    sample.label
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        let (train, test) = train_test_split(&samples, self.config.test_size, self.config.seed);
        if train.is_empty() {
            return Err(Error::TrainingError("training split is empty".to_string()));
        }

        tracing::info!(
            train = train.len(),
            test = test.len(),
            model = ?self.config.model,
            "training fake-news classifier"
        );

        let train_docs: Vec<String> = train.iter().map(|s| normalize(&s.text)).collect();
        let train_labels: Vec<String> = train.iter().map(|s| s.label.clone()).collect();

        let mut vectorizer = self.build_vectorizer();
        let features = vectorizer.fit_transform(&train_docs)?;
        tracing::debug!(features = vectorizer.n_features(), "vectorizer fitted");

        let model = self.fit_model(&features, &train_labels)?;

        let y_true: Vec<String> = test.iter().map(|s| s.label.clone()).collect();
        let y_pred: Vec<String> = test
            .iter()
            .map(|s| {
                let features = vectorizer.transform(&normalize(&s.text));
                model.predict(&features).map(|(label, _)| label)
            })
            .collect::<std::result::Result<_, _>>()?;

        let report =
            EvaluationReport::from_predictions(model.classes(), &y_true, &y_pred, train.len());
        tracing::info!(accuracy = report.accuracy, "evaluation finished");

        let artifacts = TrainedArtifacts::new(vectorizer, model)?;
        Ok(TrainingOutcome { artifacts, report })
    }
}
