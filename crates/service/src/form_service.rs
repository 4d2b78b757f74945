use models::form::{self, Entity as FormEntity};
use models::{source_data, source_record};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, TransactionTrait,
};
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::source_record_service::SourceRecordWithData;

/// List all forms, no filtering or pagination.
pub async fn list_forms(db: &DatabaseConnection) -> Result<Vec<form::Model>, ServiceError> {
    FormEntity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get a form by id, failing when it does not exist.
pub async fn get_form(db: &DatabaseConnection, id: Uuid) -> Result<form::Model, ServiceError> {
    let found = FormEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    found.ok_or_else(|| ServiceError::not_found("form"))
}

/// Get a form by name; absence is not an error here, the result feeds the
/// duplicate-name fast path.
pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<form::Model>, ServiceError> {
    FormEntity::find()
        .filter(form::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Resolve the form first, then return all its source records together with
/// their nested source data.
pub async fn find_form_source_records(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Vec<SourceRecordWithData>, ServiceError> {
    let found = get_form(db, id).await?;
    let rows = source_record::Entity::find()
        .filter(source_record::Column::FormId.eq(found.id))
        .find_with_related(source_data::Entity)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows.into_iter().map(SourceRecordWithData::from).collect())
}

/// Parse the field definitions out of their JSON string form and persist a
/// new form with a generated id.
pub async fn create_form(
    db: &DatabaseConnection,
    name: &str,
    fields_json: &str,
) -> Result<form::Model, ServiceError> {
    // Schema validation should have rejected malformed JSON before this
    // point, but the service must not assume it did.
    let fields: serde_json::Value = serde_json::from_str(fields_json)
        .map_err(|e| ServiceError::Validation(format!("fields is not valid JSON: {}", e)))?;

    if find_by_name(db, name).await?.is_some() {
        return Err(ServiceError::Conflict(format!("form name '{}' already exists", name)));
    }

    match form::create(db, name, fields).await {
        Ok(m) => {
            info!(id = %m.id, name = %m.name, "form created");
            Ok(m)
        }
        // The pre-check above races with concurrent inserts; the unique
        // constraint is the authoritative signal.
        Err(e) if e.is_unique_violation() => {
            Err(ServiceError::Conflict(format!("form name '{}' already exists", name)))
        }
        Err(e) => {
            error!(err = %e, name = %name, "form insert failed");
            Err(ServiceError::Model(e))
        }
    }
}

/// Delete a form and its dependents in one transaction: source data first,
/// then source records, then the form row. Order follows the FK chain; any
/// mid-transaction failure rolls all three steps back.
pub async fn delete_form(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    get_form(db, id).await?;
    db.transaction::<_, (), DbErr>(|txn| {
        Box::pin(async move {
            let record_ids: Vec<Uuid> = source_record::Entity::find()
                .filter(source_record::Column::FormId.eq(id))
                .all(txn)
                .await?
                .into_iter()
                .map(|r| r.id)
                .collect();
            source_data::Entity::delete_many()
                .filter(source_data::Column::SourceRecordId.is_in(record_ids))
                .exec(txn)
                .await?;
            source_record::Entity::delete_many()
                .filter(source_record::Column::FormId.eq(id))
                .exec(txn)
                .await?;
            form::Entity::delete_by_id(id).exec(txn).await?;
            Ok(())
        })
    })
    .await
    .map_err(|e: sea_orm::TransactionError<DbErr>| {
        error!(err = %e, form_id = %id, "cascade delete rolled back");
        ServiceError::from(e)
    })?;
    info!(form_id = %id, "form and dependents deleted");
    Ok(())
}
