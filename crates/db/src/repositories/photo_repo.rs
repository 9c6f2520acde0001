//! Repository for the `photo_uploads` table.

use ecoconnect_core::types::DbId;
use sqlx::PgPool;

use crate::models::photo::PhotoUpload;

/// Column list for `photo_uploads` queries.
const PHOTO_COLUMNS: &str = "id, event_id, user_id, file_path, caption, uploaded_at";

/// Provides operations over photo uploads.
pub struct PhotoRepo;

impl PhotoRepo {
    /// Record a stored photo file.
    pub async fn create(
        pool: &PgPool,
        event_id: DbId,
        user_id: DbId,
        file_path: &str,
        caption: Option<&str>,
    ) -> Result<PhotoUpload, sqlx::Error> {
        let query = format!(
            "INSERT INTO photo_uploads (event_id, user_id, file_path, caption) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {PHOTO_COLUMNS}"
        );
        sqlx::query_as::<_, PhotoUpload>(&query)
            .bind(event_id)
            .bind(user_id)
            .bind(file_path)
            .bind(caption)
            .fetch_one(pool)
            .await
    }

    /// List an event's photos, newest first.
    pub async fn list_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<PhotoUpload>, sqlx::Error> {
        let query = format!(
            "SELECT {PHOTO_COLUMNS} FROM photo_uploads \
             WHERE event_id = $1 \
             ORDER BY uploaded_at DESC"
        );
        sqlx::query_as::<_, PhotoUpload>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }
}
