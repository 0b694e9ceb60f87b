//! Scroll-behavior label encoding, fixed at training time.

use crate::error::{ServiceError, ServiceResult};
use serde::{Deserialize, Serialize};

/// Label encoder for the categorical scroll_behavior feature.
///
/// Codes are opaque discriminators the forest was trained against; they carry
/// no ordinal meaning. Re-fitting on different labels invalidates the trained
/// forest, so the encoder only ships inside the model bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollEncoder {
    classes: Vec<String>,
}

impl ScrollEncoder {
    /// Fit on training labels: sorted, deduplicated, index = code. Matches
    /// the label encoding the offline training pipeline applies, so codes
    /// line up with the artifact. Training-time only.
    pub fn fit<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes: Vec<String> = labels.into_iter().map(Into::into).collect();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    /// Encode a label to its fitted integer code. Unseen labels are a hard
    /// error, never defaulted.
    pub fn encode(&self, label: &str) -> ServiceResult<i64> {
        self.classes
            .iter()
            .position(|c| c == label)
            .map(|i| i as i64)
            .ok_or_else(|| ServiceError::UnknownCategory(label.to_string()))
    }

    /// Fitted vocabulary, in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}
