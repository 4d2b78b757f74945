use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SourceRecord: index on form_id for per-form listings and deletes
        manager
            .create_index(
                Index::create()
                    .name("idx_source_record_form")
                    .table(SourceRecord::Table)
                    .col(SourceRecord::FormId)
                    .to_owned(),
            )
            .await?;

        // SourceData: index on source_record_id
        manager
            .create_index(
                Index::create()
                    .name("idx_source_data_record")
                    .table(SourceData::Table)
                    .col(SourceData::SourceRecordId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_source_record_form").table(SourceRecord::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_source_data_record").table(SourceData::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SourceRecord { Table, FormId }

#[derive(DeriveIden)]
enum SourceData { Table, SourceRecordId }
