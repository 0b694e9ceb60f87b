//! Confidence metrics and risk factors from raw features. A pure function of
//! the pre-encoding vector, so explanations stay stable across model swaps.

use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};

const LOW_MOUSE_MOVEMENT: f64 = 2.0;
const FAST_TYPING_CPM: f64 = 800.0;
const REGULAR_CLICK_PATTERN: f64 = 0.3;
const SHORT_TIME_SPENT_SEC: f64 = 5.0;
const QUICK_FORM_FILL_SEC: f64 = 3.0;

/// Named sub-scores, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceMetrics {
    pub mouse_movement_score: f64,
    pub typing_pattern_score: f64,
    pub click_pattern_score: f64,
    pub time_spent_score: f64,
}

#[derive(Debug, Default)]
pub struct RiskEvaluator;

impl RiskEvaluator {
    /// Evaluate both layers in one pass over the raw features.
    pub fn evaluate(&self, features: &FeatureVector) -> (ConfidenceMetrics, Vec<String>) {
        (
            self.confidence_metrics(features),
            self.risk_factors(features),
        )
    }

    pub fn confidence_metrics(&self, f: &FeatureVector) -> ConfidenceMetrics {
        ConfidenceMetrics {
            mouse_movement_score: (f.mouse_movement / 10.0).min(1.0),
            typing_pattern_score: (1.0 - f.typing_speed / 1000.0).clamp(0.0, 1.0),
            click_pattern_score: f.click_pattern,
            time_spent_score: (f.time_spent / 30.0).min(1.0),
        }
    }

    /// Triggered rules, in fixed evaluation order. Each rule fires
    /// independently; the thresholds are fixed constants.
    pub fn risk_factors(&self, f: &FeatureVector) -> Vec<String> {
        let mut factors = Vec::new();
        if f.mouse_movement < LOW_MOUSE_MOVEMENT {
            factors.push("Unusually low mouse movement".to_string());
        }
        if f.typing_speed > FAST_TYPING_CPM {
            factors.push("Suspiciously fast typing speed".to_string());
        }
        if f.click_pattern < REGULAR_CLICK_PATTERN {
            factors.push("Regular click pattern detected".to_string());
        }
        if f.time_spent < SHORT_TIME_SPENT_SEC {
            factors.push("Very short page interaction time".to_string());
        }
        if f.captcha_success == 0 {
            factors.push("Failed CAPTCHA".to_string());
        }
        if f.form_fill_time < QUICK_FORM_FILL_SEC {
            factors.push("Suspiciously quick form filling".to_string());
        }
        factors
    }
}
