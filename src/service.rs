//! Prediction orchestration: validate → encode → classify → risk evaluate,
//! plus the session-level variant that writes through the store.

use crate::error::{ServiceError, ServiceResult};
use crate::features::{FeatureVector, FEATURE_NAMES};
use crate::model::ModelBundle;
use crate::risk::{ConfidenceMetrics, RiskEvaluator};
use crate::session::{Session, SessionStore};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

/// Sequence suffix appended to session ids so bursts inside one clock tick
/// still get distinct ids.
static SESSION_SEQ: AtomicU64 = AtomicU64::new(0);

/// One scored feature vector. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub is_bot: bool,
    pub probability: f64,
    pub confidence_metrics: ConfidenceMetrics,
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub model_loaded: bool,
}

/// Loaded-model description for the dashboard. model_type and
/// scroll_behaviors are null while the service is degraded.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub model_type: Option<String>,
    pub features: Vec<&'static str>,
    pub scroll_behaviors: Option<Vec<String>>,
}

/// Owns the loaded bundle, the rule layer, and write access to the session
/// store. Handlers share it behind an `Arc`; all methods take `&self`.
pub struct PredictionService {
    bundle: Option<Arc<ModelBundle>>,
    risk: RiskEvaluator,
    store: SessionStore,
}

impl PredictionService {
    /// `bundle` is `None` when the artifact failed to load at startup; the
    /// service then reports itself degraded and inference fails fast.
    pub fn new(bundle: Option<Arc<ModelBundle>>, store: SessionStore) -> Self {
        Self {
            bundle,
            risk: RiskEvaluator::default(),
            store,
        }
    }

    pub fn model_loaded(&self) -> bool {
        self.bundle.is_some()
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: if self.model_loaded() {
                "online"
            } else {
                "degraded"
            },
            model_loaded: self.model_loaded(),
        }
    }

    pub fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model_type: self.bundle.as_ref().map(|b| b.model_type.clone()),
            features: FEATURE_NAMES.to_vec(),
            scroll_behaviors: self
                .bundle
                .as_ref()
                .map(|b| b.encoder.classes().to_vec()),
        }
    }

    /// Stateless scoring: no session is minted and the store is untouched.
    pub fn predict(&self, features: &FeatureVector) -> ServiceResult<PredictionResult> {
        features.validate()?;
        let bundle = self.bundle.as_ref().ok_or(ServiceError::ModelUnavailable)?;
        let encoded = features.encode(&bundle.encoder)?;

        let probability = bundle.predict_probability(&encoded);
        let is_bot = probability >= bundle.threshold;
        let (confidence_metrics, risk_factors) = self.risk.evaluate(features);

        Ok(PredictionResult {
            is_bot,
            probability,
            confidence_metrics,
            risk_factors,
        })
    }

    /// Session-level scoring: mints a unique session id and writes the scored
    /// session through the store. Returns the result together with the id.
    pub fn predict_session(
        &self,
        features: &FeatureVector,
    ) -> ServiceResult<(PredictionResult, String)> {
        let prediction = self.predict(features)?;
        let session_id = mint_session_id();

        let session = Session {
            session_id: session_id.clone(),
            created_at: Utc::now(),
            features: features.clone(),
            prediction: prediction.clone(),
        };
        info!(
            session_id = %session.session_id,
            is_bot = prediction.is_bot,
            probability = prediction.probability,
            "session scored"
        );
        self.store.put(session);

        Ok((prediction, session_id))
    }

    /// Most recently scored session, falling back to the persisted copy.
    pub fn latest_session(&self) -> ServiceResult<Session> {
        self.store.get()
    }
}

/// Microsecond timestamp plus a process-wide sequence number.
fn mint_session_id() -> String {
    let micros = Utc::now().timestamp_micros();
    let seq = SESSION_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("session_{micros}_{seq}")
}
