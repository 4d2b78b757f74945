use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SourceRecord::Table)
                    .if_not_exists()
                    .col(uuid(SourceRecord::Id).primary_key())
                    .col(uuid(SourceRecord::FormId).not_null())
                    .col(timestamp_with_time_zone(SourceRecord::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_source_record_form")
                            .from(SourceRecord::Table, SourceRecord::FormId)
                            .to(Form::Table, Form::Id)
                            // Restrict: dependent rows are removed only by the
                            // service-level transactional cascade.
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SourceRecord::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SourceRecord { Table, Id, FormId, CreatedAt }

#[derive(DeriveIden)]
enum Form { Table, Id }
