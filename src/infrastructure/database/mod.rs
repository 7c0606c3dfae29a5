//! Database Module
//!
//! SQLite connection pool, schema migrations, and transaction management.

pub mod unit_of_work;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::DatabaseSettings;

pub use unit_of_work::{with_transaction, TransactionContext};

/// Create a SQLite connection pool.
///
/// The database file is created when missing and foreign keys are enforced on
/// every connection. Connections are kept for the life of the pool so that
/// in-memory databases survive idle periods.
pub async fn create_pool(settings: &DatabaseSettings) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(settings.connection_url())?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Run database migrations.
///
/// Safe to call on every startup: applied migrations are skipped and the
/// schema itself only uses `IF NOT EXISTS`.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
