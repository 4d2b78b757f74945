use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;

/// Uniform error envelope: `{ name, statusCode, message, stack }`.
/// `stack` carries the underlying cause chain; acceptable for an internal
/// tool, not for a hardened deployment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub name: String,
    pub status_code: u16,
    pub message: String,
    pub stack: String,
}

impl ApiError {
    /// Request-shape failures (bad uuid, malformed body) before any service
    /// call; always a 400 named like the service's own validation errors.
    pub fn validation(message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            name: "ValidationError".into(),
            status_code: StatusCode::BAD_REQUEST.as_u16(),
            message: message.into(),
            stack: cause.into(),
        }
    }

    /// Map a service error to the envelope, keeping its kind as `name`.
    pub fn from_service(err: &ServiceError, status: StatusCode, message: &str) -> Self {
        Self {
            name: err.kind().into(),
            status_code: status.as_u16(),
            message: message.into(),
            stack: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
