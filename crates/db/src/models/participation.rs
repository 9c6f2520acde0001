//! Event participation model and DTOs.

use ecoconnect_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `event_participations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Participation {
    pub id: DbId,
    pub user_id: DbId,
    pub event_id: DbId,
    pub joined_at: Timestamp,
    pub attended: bool,
    pub feedback: Option<String>,
}

/// A participation joined with its event, for the dashboard's
/// "events you joined" list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JoinedEvent {
    pub event_id: DbId,
    pub title: String,
    pub start_time: Timestamp,
    pub joined_at: Timestamp,
    pub attended: bool,
}

/// DTO for post-event feedback on an existing participation.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    pub attended: bool,
    pub feedback: Option<String>,
}
