pub use sea_orm_migration::prelude::*;

mod m20260612_000001_facility;
mod m20260612_000002_facility_alias;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260612_000001_facility::Migration),
            Box::new(m20260612_000002_facility_alias::Migration),
        ]
    }
}
