//! Service error taxonomy. Each failure mode is a distinct variant; nothing
//! is ever downgraded to a default prediction.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The model bundle failed to load at startup; the service runs degraded
    /// and every inference operation short-circuits with this error.
    #[error("model not loaded")]
    ModelUnavailable,

    /// scroll_behavior label outside the vocabulary the encoder was fitted on.
    #[error("unknown scroll_behavior category: {0:?}")]
    UnknownCategory(String),

    /// A numeric feature violated its declared domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No session has been scored yet and none is persisted.
    #[error("no session data available")]
    NoSession,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            // Encoding failures surface as a 500-class error, matching the
            // contract the dashboard and extension already handle.
            ServiceError::UnknownCategory(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::NoSession => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
