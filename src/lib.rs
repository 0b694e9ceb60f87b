//! Botwatch — bot-session scoring service for e-commerce telemetry.
//!
//! Modular structure:
//! - [`features`] — Behavioral feature vectors and scroll-behavior encoding
//! - [`model`] — Pretrained random-forest classifier bundle
//! - [`risk`] — Rule-based confidence metrics and risk factors
//! - [`session`] — Latest-session store with durable fallback
//! - [`service`] — Prediction orchestration
//! - [`http`] — HTTP API (axum)
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod error;
pub mod features;
pub mod http;
pub mod logging;
pub mod model;
pub mod risk;
pub mod service;
pub mod session;

pub use config::ServiceConfig;
pub use error::{ServiceError, ServiceResult};
pub use features::{EncodedFeatureVector, FeatureVector, ScrollEncoder};
pub use model::ModelBundle;
pub use risk::{ConfidenceMetrics, RiskEvaluator};
pub use service::{PredictionResult, PredictionService};
pub use session::{Session, SessionStore};
