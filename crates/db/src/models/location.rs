//! Location registry model and DTOs.

use ecoconnect_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// DTO for creating a location (admin only).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLocation {
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
