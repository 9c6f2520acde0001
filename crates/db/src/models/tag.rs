//! Event tag registry model and DTOs.

use ecoconnect_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `event_tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventTag {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Hex color code shown in tag badges (e.g. `"#6c757d"`).
    pub color_code: String,
}

/// DTO for creating a tag (admin only).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTag {
    pub name: String,
    pub description: Option<String>,
    pub color_code: Option<String>,
}
