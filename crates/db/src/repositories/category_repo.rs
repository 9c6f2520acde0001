//! Repository for the `event_categories` registry.

use ecoconnect_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{CreateCategory, EventCategory};

/// Default badge color for new categories.
const DEFAULT_COLOR: &str = "#28a745";

/// Provides operations over the category registry.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories alphabetically.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<EventCategory>, sqlx::Error> {
        sqlx::query_as::<_, EventCategory>(
            "SELECT id, name, description, color_code FROM event_categories ORDER BY name",
        )
        .fetch_all(pool)
        .await
    }

    /// Find a category by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EventCategory>, sqlx::Error> {
        sqlx::query_as::<_, EventCategory>(
            "SELECT id, name, description, color_code FROM event_categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Insert a new category. Fails with a unique violation on duplicate name.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCategory,
    ) -> Result<EventCategory, sqlx::Error> {
        sqlx::query_as::<_, EventCategory>(
            "INSERT INTO event_categories (name, description, color_code) \
             VALUES ($1, $2, $3) \
             RETURNING id, name, description, color_code",
        )
        .bind(input.name.trim())
        .bind(input.description.trim())
        .bind(input.color_code.as_deref().unwrap_or(DEFAULT_COLOR))
        .fetch_one(pool)
        .await
    }
}
