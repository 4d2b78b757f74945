use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SourceData::Table)
                    .if_not_exists()
                    .col(uuid(SourceData::Id).primary_key())
                    .col(uuid(SourceData::SourceRecordId).not_null())
                    .col(text(SourceData::Question).not_null())
                    .col(text(SourceData::Answer).not_null())
                    .col(timestamp_with_time_zone(SourceData::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_source_data_source_record")
                            .from(SourceData::Table, SourceData::SourceRecordId)
                            .to(SourceRecord::Table, SourceRecord::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SourceData::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SourceData { Table, Id, SourceRecordId, Question, Answer, CreatedAt }

#[derive(DeriveIden)]
enum SourceRecord { Table, Id }
