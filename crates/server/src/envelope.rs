use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Uniform success envelope: `{ statusCode, data, message: "success" }`.
/// Every non-error JSON response goes through this wrapper.
pub struct ApiSuccess<T: Serialize>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        let ApiSuccess(status, data) = self;
        let body = serde_json::json!({
            "statusCode": status.as_u16(),
            "data": data,
            "message": "success",
        });
        (status, Json(body)).into_response()
    }
}
