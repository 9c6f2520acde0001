//! Event category registry model and DTOs.

use ecoconnect_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `event_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventCategory {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Hex color code shown in category badges (e.g. `"#28a745"`).
    pub color_code: String,
}

/// DTO for creating a category (admin only).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub color_code: Option<String>,
}
