//! The item record - the sole persisted entity

use sqlx::FromRow;

/// A catalog item.
///
/// `id` is assigned by the database at creation and never changes or gets
/// reused; `name` is required at the storage level, `description` is
/// optional.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl Item {
    /// Description for display, empty when absent.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
