use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(utoipa::ToSchema)]
pub struct CreateFormInputDoc {
    pub name: String,
    /// Field definitions as a JSON-encoded string
    pub fields: String,
}

#[derive(utoipa::ToSchema)]
pub struct AnswerInputDoc {
    pub question: String,
    pub answer: String,
}

#[derive(utoipa::ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateSourceRecordInputDoc {
    pub form_id: Uuid,
    pub answers: Vec<AnswerInputDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::forms::get_one,
        crate::routes::forms::list,
        crate::routes::forms::source_records,
        crate::routes::forms::create,
        crate::routes::forms::delete,
        crate::routes::source_records::list,
        crate::routes::source_records::create,
    ),
    components(
        schemas(
            HealthResponse,
            CreateFormInputDoc,
            AnswerInputDoc,
            CreateSourceRecordInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "form"),
        (name = "source-record")
    ),
    info(title = "Form Builder Api", description = "Form builder api")
)]
pub struct ApiDoc;
