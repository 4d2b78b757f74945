

/// Integration tests combining multiple entities
pub mod integration_tests {
    use crate::db::connect;
    use crate::{form, source_data, source_record};
    use anyhow::Result;
    use migration::MigratorTrait;
    use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, TransactionTrait};
    use serde_json::json;
    use uuid::Uuid;

    /// Test complete workflow: form -> source record -> source data -> cascade delete
    #[tokio::test]
    async fn test_complete_workflow() -> Result<()> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }

        let db = connect().await?;
        migration::Migrator::up(&db, None).await?;

        let form_name = format!("workflow_form_{}", Uuid::new_v4());
        let test_form = form::create(&db, &form_name, json!({"title": {"type": "text"}})).await?;

        let record = source_record::create(&db, test_form.id).await?;
        let _d1 = source_data::create(&db, record.id, "title", "hello").await?;
        let _d2 = source_data::create(&db, record.id, "body", "world").await?;

        // Fetch the record together with its nested data
        let rows = source_record::Entity::find()
            .filter(source_record::Column::FormId.eq(test_form.id))
            .find_with_related(source_data::Entity)
            .all(&db)
            .await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1.len(), 2);

        // Cascade delete: data, then records, then the form, in one transaction
        let form_id = test_form.id;
        db.transaction::<_, (), DbErr>(|txn| {
            Box::pin(async move {
                let record_ids: Vec<Uuid> = source_record::Entity::find()
                    .filter(source_record::Column::FormId.eq(form_id))
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
                    .filter(source_record::Column::FormId.eq(form_id))
                    .exec(txn)
                    .await?;
                form::Entity::delete_by_id(form_id).exec(txn).await?;
                Ok(())
            })
        })
        .await?;

        assert!(form::Entity::find_by_id(test_form.id).one(&db).await?.is_none());
        let leftover = source_record::Entity::find()
            .filter(source_record::Column::FormId.eq(test_form.id))
            .all(&db)
            .await?;
        assert!(leftover.is_empty());

        println!("Complete workflow test finished successfully");
        Ok(())
    }
}
