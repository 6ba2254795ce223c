//! Item repository
//!
//! CRUD plus paginated listing over the items table. Listing orders by id
//! ascending so pages follow creation order.

use sqlx::SqlitePool;

use crate::models::{Item, Paginated, Pagination};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i64 },
}

/// Item repository
pub struct ItemRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an item and return the stored row, fresh id included.
    ///
    /// No uniqueness constraint on name: inserting the same name twice
    /// produces two rows.
    pub async fn create(&self, name: &str, description: Option<&str>) -> Result<Item, DbError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, description)
            VALUES (?, ?)
            RETURNING id, name, description
            "#,
        )
        .bind(name)
        .bind(description)
        .fetch_one(self.pool)
        .await?;

        Ok(item)
    }

    /// Get a single item by id.
    pub async fn get(&self, id: i64) -> Result<Item, DbError> {
        sqlx::query_as::<_, Item>("SELECT id, name, description FROM items WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound {
                resource: "item",
                id,
            })
    }

    /// Overwrite name and description in place. The id never changes.
    ///
    /// Last write wins: there is no conflict detection between concurrent
    /// edits of the same item.
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        description: Option<&str>,
    ) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE items SET name = ?, description = ? WHERE id = ?")
            .bind(name)
            .bind(description)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "item",
                id,
            });
        }
        Ok(())
    }

    /// Remove an item. Deleting an id that is already gone fails NotFound.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "item",
                id,
            });
        }
        Ok(())
    }

    /// List one page of items in creation order (id ascending).
    ///
    /// The total count is queried separately so out-of-range pages still
    /// report the real page count; they come back with an empty item slice
    /// rather than an error.
    pub async fn list(&self, page: Pagination) -> Result<Paginated<Item>, DbError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(self.pool)
            .await?;

        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, description
            FROM items
            ORDER BY id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(self.pool)
        .await?;

        Ok(Paginated {
            items,
            total,
            page: page.page,
        })
    }
}
