//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_form;
mod m20220101_000002_create_source_record;
mod m20220101_000003_create_source_data;
mod m20220101_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_form::Migration),
            Box::new(m20220101_000002_create_source_record::Migration),
            Box::new(m20220101_000003_create_source_data::Migration),
            // Indexes should always be applied last
            Box::new(m20220101_000004_add_indexes::Migration),
        ]
    }
}
