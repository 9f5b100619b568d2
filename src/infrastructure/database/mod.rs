//! Persistence layer: SeaORM entities, migrations and repositories.

pub mod entities;
pub mod migrator;
pub mod repositories;

use migrator::Migrator;
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

/// Open a connection and bring the schema up to date.
///
/// `url` comes from configuration: a SQLite URL such as
/// `sqlite://./accounts.db?mode=rwc`, or a full PostgreSQL URL.
pub async fn connect_and_migrate(url: &str) -> Result<DatabaseConnection, DbErr> {
    info!("Connecting to database: {}", url);
    let db = Database::connect(url).await?;

    Migrator::up(&db, None).await?;
    info!("Database schema is up to date");

    Ok(db)
}
