//! SeaORM migrations for multi-database support
//!
//! Database-agnostic migrations that work across SQLite, PostgreSQL and
//! MySQL. Database-specific column types are applied where necessary.

use sea_orm_migration::prelude::*;

pub mod m20250801_000001_create_users_and_tasks;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(
            m20250801_000001_create_users_and_tasks::Migration,
        )]
    }
}
