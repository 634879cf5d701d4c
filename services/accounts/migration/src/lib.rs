use sea_orm_migration::prelude::*;

mod m20260120_000001_create_accounts;
mod m20260120_000002_create_passcodes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260120_000001_create_accounts::Migration),
            Box::new(m20260120_000002_create_passcodes::Migration),
        ]
    }
}
