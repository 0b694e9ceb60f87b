//! Co-versioned model artifact: forest, scroll vocabulary and decision
//! threshold in one file, so an encoder/classifier mismatch cannot happen.

use super::forest::Forest;
use crate::features::{EncodedFeatureVector, ScrollEncoder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const BUNDLE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to read bundle: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse bundle: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid bundle: {0}")]
    Invalid(String),
}

/// The (encoder, classifier) pair fitted together offline by the training
/// pipeline. Loaded once at service start, immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelBundle {
    pub schema_version: u32,
    /// Upstream estimator name, surfaced by /model_info
    pub model_type: String,
    /// Artifact version identifier set by the training pipeline
    pub version: String,
    pub trained_at: DateTime<Utc>,
    /// Decision threshold: is_bot <=> probability >= threshold
    pub threshold: f64,
    pub encoder: ScrollEncoder,
    pub forest: Forest,
}

impl ModelBundle {
    /// Load and validate a bundle from disk.
    pub fn load(path: &Path) -> Result<Self, BundleError> {
        let data = std::fs::read_to_string(path)?;
        let bundle: ModelBundle = serde_json::from_str(&data)?;
        bundle.validate()?;
        Ok(bundle)
    }

    /// Write the bundle as pretty JSON. The training exporter and tests use
    /// this; the service itself only loads.
    pub fn save(&self, path: &Path) -> Result<(), BundleError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), BundleError> {
        if self.schema_version != BUNDLE_SCHEMA_VERSION {
            return Err(BundleError::Invalid(format!(
                "unsupported schema_version {}",
                self.schema_version
            )));
        }
        if self.encoder.classes().is_empty() {
            return Err(BundleError::Invalid("empty scroll vocabulary".into()));
        }
        if self.forest.trees.is_empty() {
            return Err(BundleError::Invalid("forest has no trees".into()));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(BundleError::Invalid(format!(
                "threshold {} outside [0, 1]",
                self.threshold
            )));
        }
        for (i, tree) in self.forest.trees.iter().enumerate() {
            tree.validate(i).map_err(BundleError::Invalid)?;
        }
        Ok(())
    }

    /// Hard bot/human label at the bundle's decision threshold.
    pub fn predict(&self, features: &EncodedFeatureVector) -> bool {
        self.predict_probability(features) >= self.threshold
    }

    /// Probability mass assigned to the bot class, in [0, 1].
    pub fn predict_probability(&self, features: &EncodedFeatureVector) -> f64 {
        self.forest.predict_probability(features)
    }
}
