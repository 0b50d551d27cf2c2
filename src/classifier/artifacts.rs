//! Trained artifacts and the artifact registry
//!
//! A fitted vectorizer and a fitted classifier are stored as two independent
//! bincode blobs. The registry loads them once at startup; a missing or
//! incompatible pair leaves the registry empty instead of failing.

use super::{LogisticRegression, NaiveBayesClassifier, ProbabilisticClassifier};
use crate::error::{ClassifierUnavailable, Error, Result};
use crate::models::{ClassificationResult, Prediction};
use crate::nlp::{TfIdf, Vectorizer};
use crate::utils::ArtifactConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Bumped whenever the serialized layout of either blob changes
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Blob<T> {
    format_version: u32,
    payload: T,
}

fn write_blob<T: Serialize>(path: &Path, payload: &T) -> Result<()> {
    let blob = Blob {
        format_version: ARTIFACT_FORMAT_VERSION,
        payload,
    };
    let encoded = bincode::serialize(&blob)?;
    std::fs::write(path, encoded)?;
    Ok(())
}

fn read_blob<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = std::fs::read(path)?;
    let blob: Blob<T> = bincode::deserialize(&data)?;
    if blob.format_version != ARTIFACT_FORMAT_VERSION {
        return Err(ClassifierUnavailable::Model(format!(
            "{} has format version {}, expected {}",
            path.display(),
            blob.format_version,
            ARTIFACT_FORMAT_VERSION
        ))
        .into());
    }
    Ok(blob.payload)
}

/// Classifier stored in the model blob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClassifierModel {
    Logistic(LogisticRegression),
    NaiveBayes(NaiveBayesClassifier),
}

impl ClassifierModel {
    pub fn name(&self) -> &'static str {
        match self {
            ClassifierModel::Logistic(_) => "logistic-regression",
            ClassifierModel::NaiveBayes(_) => "naive-bayes",
        }
    }
}

impl ProbabilisticClassifier for ClassifierModel {
    fn classes(&self) -> &[String] {
        match self {
            ClassifierModel::Logistic(m) => m.classes(),
            ClassifierModel::NaiveBayes(m) => m.classes(),
        }
    }

    fn n_features(&self) -> Option<usize> {
        match self {
            ClassifierModel::Logistic(m) => m.n_features(),
            ClassifierModel::NaiveBayes(m) => m.n_features(),
        }
    }

    fn predict_proba(&self, features: &[f64]) -> std::result::Result<Vec<f64>, ClassifierUnavailable> {
        match self {
            ClassifierModel::Logistic(m) => m.predict_proba(features),
            ClassifierModel::NaiveBayes(m) => m.predict_proba(features),
        }
    }
}

/// Fitted vectorizer + classifier pair
#[derive(Debug, Clone, PartialEq)]
pub struct TrainedArtifacts {
    vectorizer: TfIdf,
    model: ClassifierModel,
}

impl TrainedArtifacts {
    /// Pair a vectorizer with a classifier, checking they share a feature space
    pub fn new(vectorizer: TfIdf, model: ClassifierModel) -> Result<Self> {
        let artifacts = Self { vectorizer, model };
        artifacts.check_compatible()?;
        Ok(artifacts)
    }

    fn check_compatible(&self) -> std::result::Result<(), ClassifierUnavailable> {
        self.vectorizer.check_layout()?;
        let got = self.vectorizer.n_features();
        match self.model.n_features() {
            None => Err(ClassifierUnavailable::NotFitted),
            Some(expected) if expected != got => {
                Err(ClassifierUnavailable::Incompatible { expected, got })
            }
            Some(_) => Ok(()),
        }
    }

    pub fn vectorizer(&self) -> &TfIdf {
        &self.vectorizer
    }

    pub fn model(&self) -> &ClassifierModel {
        &self.model
    }

    /// Classify already-normalized text
    pub fn predict(
        &self,
        normalized_text: &str,
    ) -> std::result::Result<ClassificationResult, ClassifierUnavailable> {
        let features = self.vectorizer.transform(normalized_text);
        let (label, confidence) = self.model.predict(&features)?;

        let label = Prediction::from_class_label(&label)
            .ok_or(ClassifierUnavailable::UnknownLabel(label))?;

        if !(confidence > 0.0 && confidence <= 1.0) {
            return Err(ClassifierUnavailable::InvalidProbabilities);
        }

        Ok(ClassificationResult::new(label, confidence))
    }

    /// Write both blobs under the configured names
    pub fn save(&self, config: &ArtifactConfig) -> Result<()> {
        std::fs::create_dir_all(&config.dir)?;
        write_blob(&config.vectorizer_path(), &self.vectorizer)?;
        write_blob(&config.model_path(), &self.model)?;
        Ok(())
    }

    /// Read both blobs and verify they fit together
    pub fn load(config: &ArtifactConfig) -> Result<Self> {
        let vectorizer: TfIdf = read_blob(&config.vectorizer_path())?;
        let model: ClassifierModel = read_blob(&config.model_path())?;
        Self::new(vectorizer, model)
    }
}

/// Process-wide, read-only holder of the trained artifacts.
///
/// Built once at startup and never reloaded; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ArtifactRegistry {
    artifacts: Option<Arc<TrainedArtifacts>>,
    load_error: Option<ClassifierUnavailable>,
}

impl ArtifactRegistry {
    /// Load artifacts from disk, degrading to an empty registry on failure
    pub fn load(config: &ArtifactConfig) -> Self {
        match TrainedArtifacts::load(config) {
            Ok(artifacts) => {
                tracing::info!(
                    dir = %config.dir.display(),
                    model = artifacts.model().name(),
                    features = artifacts.vectorizer().n_features(),
                    "trained artifacts loaded"
                );
                Self::from_artifacts(artifacts)
            }
            Err(e) => {
                tracing::warn!(
                    dir = %config.dir.display(),
                    error = %e,
                    "trained artifacts unavailable, using heuristic classifier"
                );
                let reason = match e {
                    Error::Model(inner) => inner,
                    other => ClassifierUnavailable::NotLoaded(other.to_string()),
                };
                Self {
                    artifacts: None,
                    load_error: Some(reason),
                }
            }
        }
    }

    /// Registry with no artifacts
    pub fn empty() -> Self {
        Self {
            artifacts: None,
            load_error: None,
        }
    }

    pub fn from_artifacts(artifacts: TrainedArtifacts) -> Self {
        Self {
            artifacts: Some(Arc::new(artifacts)),
            load_error: None,
        }
    }

    /// Shared reference to the loaded artifacts
    pub fn get(&self) -> std::result::Result<Arc<TrainedArtifacts>, ClassifierUnavailable> {
        match &self.artifacts {
            Some(artifacts) => Ok(Arc::clone(artifacts)),
            None => Err(self.load_error.clone().unwrap_or_else(|| {
                ClassifierUnavailable::NotLoaded("no artifacts configured".to_string())
            })),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.artifacts.is_some()
    }
}

impl Default for ArtifactRegistry {
    fn default() -> Self {
        Self::empty()
    }
}
