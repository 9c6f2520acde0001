//! Repository for the `locations` registry.

use ecoconnect_core::types::DbId;
use sqlx::PgPool;

use crate::models::location::{CreateLocation, Location};

/// Provides operations over the location registry.
pub struct LocationRepo;

impl LocationRepo {
    /// List all locations alphabetically.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Location>, sqlx::Error> {
        sqlx::query_as::<_, Location>(
            "SELECT id, name, latitude, longitude FROM locations ORDER BY name",
        )
        .fetch_all(pool)
        .await
    }

    /// Find a location by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Location>, sqlx::Error> {
        sqlx::query_as::<_, Location>(
            "SELECT id, name, latitude, longitude FROM locations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Insert a new location. Fails with a unique violation on duplicate name.
    pub async fn create(pool: &PgPool, input: &CreateLocation) -> Result<Location, sqlx::Error> {
        sqlx::query_as::<_, Location>(
            "INSERT INTO locations (name, latitude, longitude) \
             VALUES ($1, $2, $3) \
             RETURNING id, name, latitude, longitude",
        )
        .bind(input.name.trim())
        .bind(input.latitude)
        .bind(input.longitude)
        .fetch_one(pool)
        .await
    }
}
