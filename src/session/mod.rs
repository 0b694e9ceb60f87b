//! Scored-session snapshot and the single-slot latest-session store.

mod store;

pub use store::{SessionStore, LATEST_SESSION_FILE};

use crate::features::FeatureVector;
use crate::service::PredictionResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scored, timestamped browsing session. Created by the prediction
/// service on each session-level request; superseded by the next one, never
/// deleted explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    /// Raw features as reported, kept pre-encoding for display
    pub features: FeatureVector,
    pub prediction: PredictionResult,
}
