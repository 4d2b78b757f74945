use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use service::{errors::ServiceError, form_service, source_record_service::SourceRecordWithData};
use tracing::{error, info};
use uuid::Uuid;

use crate::envelope::ApiSuccess;
use crate::errors::ApiError;
use crate::extract::{Json, Path};
use crate::routes::ServerState;

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateFormInput {
    pub name: String,
    /// Field definitions as a JSON-encoded string, parsed before storage
    pub fields: String,
}

#[utoipa::path(
    get, path = "/form/{id}", tag = "form",
    params(("id" = Uuid, Path, description = "Form ID")),
    responses(
        (status = 200, description = "Form found"),
        (status = 400, description = "Fetch Failed")
    )
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<ApiSuccess<models::form::Model>, ApiError> {
    match form_service::get_form(&state.db, id).await {
        Ok(form) => Ok(ApiSuccess(StatusCode::OK, form)),
        Err(e) => {
            error!(err = %e, %id, "fetch form failed");
            Err(ApiError::from_service(&e, StatusCode::BAD_REQUEST, "Failed to fetch form"))
        }
    }
}

#[utoipa::path(
    get, path = "/form", tag = "form",
    responses(
        (status = 200, description = "List OK"),
        (status = 400, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<ApiSuccess<Vec<models::form::Model>>, ApiError> {
    match form_service::list_forms(&state.db).await {
        Ok(forms) => {
            info!(count = forms.len(), "list forms");
            Ok(ApiSuccess(StatusCode::OK, forms))
        }
        Err(e) => {
            error!(err = %e, "list forms failed");
            Err(ApiError::from_service(&e, StatusCode::BAD_REQUEST, "Failed to fetch forms"))
        }
    }
}

#[utoipa::path(
    get, path = "/form/source/{id}", tag = "form",
    params(("id" = Uuid, Path, description = "Form ID")),
    responses(
        (status = 200, description = "Source records for the form"),
        (status = 404, description = "Form Not Found"),
        (status = 400, description = "Fetch Failed")
    )
)]
pub async fn source_records(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<ApiSuccess<Vec<SourceRecordWithData>>, ApiError> {
    match form_service::find_form_source_records(&state.db, id).await {
        Ok(records) => Ok(ApiSuccess(StatusCode::OK, records)),
        Err(e @ ServiceError::NotFound(_)) => {
            error!(err = %e, %id, "form not found");
            Err(ApiError::from_service(&e, StatusCode::NOT_FOUND, "Form not found"))
        }
        Err(e) => {
            error!(err = %e, %id, "fetch form source records failed");
            Err(ApiError::from_service(&e, StatusCode::BAD_REQUEST, "Failed to fetch source records"))
        }
    }
}

#[utoipa::path(
    post, path = "/form", tag = "form",
    request_body = crate::openapi::CreateFormInputDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Duplicate Name")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateFormInput>,
) -> Result<ApiSuccess<models::form::Model>, ApiError> {
    info!(name = %input.name, "form_create_request");
    match form_service::create_form(&state.db, &input.name, &input.fields).await {
        Ok(form) => {
            info!(id = %form.id, name = %form.name, "created form");
            Ok(ApiSuccess(StatusCode::OK, form))
        }
        Err(e @ ServiceError::Conflict(_)) => {
            Err(ApiError::from_service(&e, StatusCode::CONFLICT, "Form name already in use"))
        }
        Err(e @ ServiceError::Validation(_)) => {
            Err(ApiError::from_service(&e, StatusCode::BAD_REQUEST, "Invalid form payload"))
        }
        Err(e) => {
            error!(err = %e, "create form failed");
            Err(ApiError::from_service(&e, StatusCode::BAD_REQUEST, "Failed to save form"))
        }
    }
}

#[utoipa::path(
    delete, path = "/form/{id}", tag = "form",
    params(("id" = Uuid, Path, description = "Form ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    match form_service::delete_form(&state.db, id).await {
        Ok(()) => {
            info!(id = %id, "deleted form with dependents");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e @ ServiceError::NotFound(_)) => {
            error!(err = %e, %id, "form not found");
            Err(ApiError::from_service(&e, StatusCode::NOT_FOUND, "Form not found"))
        }
        Err(e) => {
            error!(err = %e, %id, "delete form failed");
            Err(ApiError::from_service(
                &e,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unexpected error while deleting data.",
            ))
        }
    }
}
