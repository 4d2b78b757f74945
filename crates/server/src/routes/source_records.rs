use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use service::{
    errors::ServiceError,
    form_service,
    source_record_service::{self, AnswerInput, SourceRecordWithData},
};
use tracing::{error, info};
use uuid::Uuid;

use crate::envelope::ApiSuccess;
use crate::errors::ApiError;
use crate::extract::Json;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSourceRecordInput {
    pub form_id: Uuid,
    pub answers: Vec<AnswerInput>,
}

#[utoipa::path(
    get, path = "/source", tag = "source-record",
    responses(
        (status = 200, description = "List OK"),
        (status = 400, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<ApiSuccess<Vec<SourceRecordWithData>>, ApiError> {
    match source_record_service::list_source_records(&state.db).await {
        Ok(records) => {
            info!(count = records.len(), "list source records");
            Ok(ApiSuccess(StatusCode::OK, records))
        }
        Err(e) => {
            error!(err = %e, "list source records failed");
            Err(ApiError::from_service(&e, StatusCode::BAD_REQUEST, "Failed to fetch source record"))
        }
    }
}

#[utoipa::path(
    post, path = "/source", tag = "source-record",
    request_body = crate::openapi::CreateSourceRecordInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Form Not Found"),
        (status = 500, description = "Save Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateSourceRecordInput>,
) -> Result<ApiSuccess<serde_json::Value>, ApiError> {
    // The service does not check the form itself; confirm it here so an
    // unknown form id maps to 404 instead of a transaction failure.
    if let Err(e) = form_service::get_form(&state.db, input.form_id).await {
        error!(err = %e, form_id = %input.form_id, "form lookup for submission failed");
        return Err(match e {
            ServiceError::NotFound(_) => {
                ApiError::from_service(&e, StatusCode::NOT_FOUND, "Form not found")
            }
            _ => ApiError::from_service(
                &e,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unexpected error while saving data.",
            ),
        });
    }

    match source_record_service::create_source_record(&state.db, input.form_id, input.answers).await
    {
        Ok(record_id) => {
            info!(id = %record_id, form_id = %input.form_id, "created source record");
            Ok(ApiSuccess(StatusCode::CREATED, serde_json::Value::Null))
        }
        Err(e @ ServiceError::Validation(_)) => {
            Err(ApiError::from_service(&e, StatusCode::BAD_REQUEST, "Invalid submission payload"))
        }
        Err(e) => {
            error!(err = %e, form_id = %input.form_id, "create source record failed");
            Err(ApiError::from_service(
                &e,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unexpected error while saving data.",
            ))
        }
    }
}
