//! Repository for the `event_tags` registry.

use sqlx::PgPool;

use crate::models::tag::{CreateTag, EventTag};

/// Default badge color for new tags.
const DEFAULT_COLOR: &str = "#6c757d";

/// Provides operations over the tag registry.
pub struct TagRepo;

impl TagRepo {
    /// List all tags alphabetically.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<EventTag>, sqlx::Error> {
        sqlx::query_as::<_, EventTag>(
            "SELECT id, name, description, color_code FROM event_tags ORDER BY name",
        )
        .fetch_all(pool)
        .await
    }

    /// Insert a new tag. Fails with a unique violation on duplicate name.
    pub async fn create(pool: &PgPool, input: &CreateTag) -> Result<EventTag, sqlx::Error> {
        sqlx::query_as::<_, EventTag>(
            "INSERT INTO event_tags (name, description, color_code) \
             VALUES ($1, $2, $3) \
             RETURNING id, name, description, color_code",
        )
        .bind(input.name.trim())
        .bind(input.description.as_deref())
        .bind(input.color_code.as_deref().unwrap_or(DEFAULT_COLOR))
        .fetch_one(pool)
        .await
    }
}
