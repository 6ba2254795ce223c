//! Database schema creation

use sqlx::SqlitePool;

/// Create the items table if it does not exist. Safe to run on every
/// startup.
///
/// AUTOINCREMENT keeps deleted ids from being handed out again, so an id
/// observed once always refers to the same item.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(100) NOT NULL,
            description VARCHAR(200)
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
