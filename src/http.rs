//! HTTP boundary: axum router over the prediction service.

use crate::error::ServiceError;
use crate::features::FeatureVector;
use crate::service::{HealthStatus, ModelInfo, PredictionResult, PredictionService};
use crate::session::Session;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PredictionService>,
}

/// Build the router with all routes. CORS is permissive: the telemetry
/// collector is a browser extension calling from arbitrary origins.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/predict", post(predict))
        .route("/predict_session", post(predict_session))
        .route("/latest_session", get(latest_session))
        .route("/model_info", get(model_info))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.service.health())
}

async fn predict(
    State(state): State<AppState>,
    Json(features): Json<FeatureVector>,
) -> Result<Json<PredictionResult>, ServiceError> {
    state.service.predict(&features).map(Json)
}

#[derive(Serialize)]
pub struct SessionPredictionResponse {
    #[serde(flatten)]
    pub prediction: PredictionResult,
    pub session_id: String,
}

async fn predict_session(
    State(state): State<AppState>,
    Json(features): Json<FeatureVector>,
) -> Result<Json<SessionPredictionResponse>, ServiceError> {
    let (prediction, session_id) = state.service.predict_session(&features)?;
    Ok(Json(SessionPredictionResponse {
        prediction,
        session_id,
    }))
}

async fn latest_session(
    State(state): State<AppState>,
) -> Result<Json<Session>, ServiceError> {
    state.service.latest_session().map(Json)
}

async fn model_info(State(state): State<AppState>) -> Json<ModelInfo> {
    Json(state.service.model_info())
}
