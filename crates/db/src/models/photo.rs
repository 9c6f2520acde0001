//! Photo upload model.

use ecoconnect_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `photo_uploads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhotoUpload {
    pub id: DbId,
    pub event_id: DbId,
    pub user_id: DbId,
    /// Path of the stored file, relative to the media directory.
    pub file_path: String,
    pub caption: Option<String>,
    pub uploaded_at: Timestamp,
}
