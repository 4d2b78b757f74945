use chrono::Utc;
use models::{source_data, source_record};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::ServiceError;

/// A source record joined with its answers. `source_data` is always present,
/// empty when the record has no rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRecordWithData {
    pub id: Uuid,
    pub form_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub source_data: Vec<source_data::Model>,
}

impl From<(source_record::Model, Vec<source_data::Model>)> for SourceRecordWithData {
    fn from((record, data): (source_record::Model, Vec<source_data::Model>)) -> Self {
        Self {
            id: record.id,
            form_id: record.form_id,
            created_at: record.created_at,
            source_data: data,
        }
    }
}

/// One question/answer pair of a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerInput {
    pub question: String,
    pub answer: String,
}

/// List all source records, each with its nested source data.
pub async fn list_source_records(
    db: &DatabaseConnection,
) -> Result<Vec<SourceRecordWithData>, ServiceError> {
    let rows = source_record::Entity::find()
        .find_with_related(source_data::Entity)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows.into_iter().map(SourceRecordWithData::from).collect())
}

/// Create one source record plus one source data row per answer, linked to
/// the generated record id, all-or-nothing.
///
/// Does not verify the form exists; callers pre-check. An orphaned form id
/// surfaces as a transaction error from the foreign key.
pub async fn create_source_record(
    db: &DatabaseConnection,
    form_id: Uuid,
    answers: Vec<AnswerInput>,
) -> Result<Uuid, ServiceError> {
    if answers.is_empty() {
        return Err(ServiceError::Validation("answers must contain at least one entry".into()));
    }
    let record_id = Uuid::new_v4();
    db.transaction::<_, (), DbErr>(|txn| {
        Box::pin(async move {
            source_record::ActiveModel {
                id: Set(record_id),
                form_id: Set(form_id),
                created_at: Set(Utc::now().into()),
            }
            .insert(txn)
            .await?;

            let rows = answers.into_iter().map(|a| source_data::ActiveModel {
                id: Set(Uuid::new_v4()),
                source_record_id: Set(record_id),
                question: Set(a.question),
                answer: Set(a.answer),
                created_at: Set(Utc::now().into()),
            });
            source_data::Entity::insert_many(rows).exec(txn).await?;
            Ok(())
        })
    })
    .await
    .map_err(|e: sea_orm::TransactionError<DbErr>| {
        error!(err = %e, form_id = %form_id, "source record insert rolled back");
        ServiceError::from(e)
    })?;
    info!(id = %record_id, form_id = %form_id, "source record created");
    Ok(record_id)
}
