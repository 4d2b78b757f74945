use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Form::Table)
                    .if_not_exists()
                    .col(uuid(Form::Id).primary_key())
                    // Unique at the database level; the service pre-check is
                    // only a fast path and the constraint is the authority.
                    .col(string_len(Form::Name, 255).unique_key().not_null())
                    .col(json_binary(Form::Fields).not_null())
                    .col(timestamp_with_time_zone(Form::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Form::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Form { Table, Id, Name, Fields, CreatedAt }
