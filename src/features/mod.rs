//! Behavioral feature vectors: raw (as reported by telemetry) and encoded
//! (the only form the classifier accepts).

mod encoder;

pub use encoder::ScrollEncoder;

use crate::error::{ServiceError, ServiceResult};
use serde::{Deserialize, Serialize};

/// Model input width.
pub const FEATURE_COUNT: usize = 7;

/// Feature names in the exact column order the classifier was trained on.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "mouse_movement",
    "typing_speed",
    "click_pattern",
    "time_spent",
    "scroll_behavior_code",
    "captcha_success",
    "form_fill_time",
];

/// Raw per-session behavioral features, scroll behavior still categorical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Total mouse movement in normalized units
    pub mouse_movement: f64,
    /// Typing speed, characters per minute
    pub typing_speed: f64,
    /// Click regularity score in [0, 1]; low means machine-regular
    pub click_pattern: f64,
    /// Time spent on the page, seconds
    pub time_spent: f64,
    /// Categorical scroll behavior label; must belong to the fitted vocabulary
    pub scroll_behavior: String,
    /// 1 if the CAPTCHA was solved, 0 otherwise
    pub captcha_success: i64,
    /// Form fill duration, seconds
    pub form_fill_time: f64,
}

impl FeatureVector {
    /// Check every numeric feature against its declared domain. Runs before
    /// any encoding or inference attempt.
    pub fn validate(&self) -> ServiceResult<()> {
        check_non_negative("mouse_movement", self.mouse_movement)?;
        check_non_negative("typing_speed", self.typing_speed)?;
        if !self.click_pattern.is_finite() || !(0.0..=1.0).contains(&self.click_pattern) {
            return Err(ServiceError::InvalidInput(format!(
                "click_pattern must be within [0, 1], got {}",
                self.click_pattern
            )));
        }
        check_non_negative("time_spent", self.time_spent)?;
        if !(0..=1).contains(&self.captcha_success) {
            return Err(ServiceError::InvalidInput(format!(
                "captcha_success must be 0 or 1, got {}",
                self.captcha_success
            )));
        }
        check_non_negative("form_fill_time", self.form_fill_time)?;
        Ok(())
    }

    /// Encode the scroll label and assemble the classifier input.
    pub fn encode(&self, encoder: &ScrollEncoder) -> ServiceResult<EncodedFeatureVector> {
        Ok(EncodedFeatureVector {
            mouse_movement: self.mouse_movement,
            typing_speed: self.typing_speed,
            click_pattern: self.click_pattern,
            time_spent: self.time_spent,
            scroll_behavior_code: encoder.encode(&self.scroll_behavior)?,
            captcha_success: self.captcha_success,
            form_fill_time: self.form_fill_time,
        })
    }
}

fn check_non_negative(name: &str, value: f64) -> ServiceResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ServiceError::InvalidInput(format!(
            "{name} must be a finite non-negative number, got {value}"
        )));
    }
    Ok(())
}

/// Classifier input: scroll label replaced by its integer code. Derived from
/// a [`FeatureVector`], never persisted independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncodedFeatureVector {
    pub mouse_movement: f64,
    pub typing_speed: f64,
    pub click_pattern: f64,
    pub time_spent: f64,
    pub scroll_behavior_code: i64,
    pub captcha_success: i64,
    pub form_fill_time: f64,
}

impl EncodedFeatureVector {
    /// Columns in training order. Reordering here silently produces wrong
    /// predictions, so [`FEATURE_NAMES`] is the authoritative layout.
    pub fn to_columns(&self) -> [f64; FEATURE_COUNT] {
        [
            self.mouse_movement,
            self.typing_speed,
            self.click_pattern,
            self.time_spent,
            self.scroll_behavior_code as f64,
            self.captcha_success as f64,
            self.form_fill_time,
        ]
    }
}
