//! Database connection pool management
//!
//! Uses a sqlx SqlitePool with explicit connection limits. The database
//! file is created on first connect if it does not exist.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low for single-user tooling.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a SQLite connection pool.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string, e.g. `sqlite:items.db`
///
/// # Errors
///
/// Returns an error if the URL is malformed or the connection fails.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with custom options.
///
/// In-memory databases (`sqlite::memory:`) must use `max_connections = 1`:
/// each connection opens its own private database, so a larger pool would
/// hand out connections that cannot see the created schema.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}
