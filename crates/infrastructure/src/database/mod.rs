mod agent_repository;
mod delivery_repository;
mod package_repository;

pub mod entities;

pub use agent_repository::SeaOrmAgentRepository;
pub use delivery_repository::SeaOrmDeliveryRepository;
pub use package_repository::SeaOrmPackageRepository;

use domain::DomainError;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::time::Duration;
use tracing::info;

/// Open a pooled connection to the relational store.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_string());
    options
        .max_connections(10)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    // In-memory SQLite is per connection; a bigger pool would see empty databases.
    if database_url.starts_with("sqlite::memory:") {
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;
    info!("✅ Database connection established");
    Ok(db)
}

/// Map a sea-orm error onto the domain taxonomy. Unique-key violations
/// become conflicts; everything else is a database failure.
pub(crate) fn db_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::Conflict(msg),
        _ => DomainError::Database(e.to_string()),
    }
}
