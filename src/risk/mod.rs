//! Rule-based risk layer, independent of the classifier's own decision.

mod engine;

pub use engine::{ConfidenceMetrics, RiskEvaluator};
