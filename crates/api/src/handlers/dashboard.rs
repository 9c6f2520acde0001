//! Handler for the personal dashboard.
//!
//! Pure read/summarize operation plus a fire-and-forget page-visit record.

use axum::extract::State;
use axum::Json;
use ecoconnect_core::activity::{self, ActivityItem, ActivityKind, ITEMS_PER_SOURCE};
use ecoconnect_db::models::event::EventSummary;
use ecoconnect_db::models::participation::JoinedEvent;
use ecoconnect_db::repositories::{DashboardRepo, HistoryRepo, ParticipationRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Recent-list length for organized and joined events.
const RECENT_EVENTS_LIMIT: i64 = 5;

/// Aggregated dashboard payload.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub events_organized: i64,
    pub events_joined: i64,
    pub photos_uploaded: i64,
    pub total_visits: i64,
    pub organized_events: Vec<EventSummary>,
    pub joined_events: Vec<JoinedEvent>,
    pub recent_activity: Vec<ActivityItem>,
}

/// GET /api/v1/interaction/dashboard
///
/// Per-user counters, the 5 most recent organized and joined events, and a
/// merged recent-activity feed. Each view also appends a page-visit row;
/// that write is fire-and-forget and never fails the request.
pub async fn dashboard(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardResponse>>> {
    let user_id = auth.user_id;

    let _ = HistoryRepo::record_visit(&state.pool, user_id, "dashboard", None).await;

    let counts = DashboardRepo::counts(&state.pool, user_id).await?;
    let organized_events =
        DashboardRepo::recent_organized(&state.pool, user_id, RECENT_EVENTS_LIMIT).await?;
    let joined_events =
        ParticipationRepo::recent_joined(&state.pool, user_id, RECENT_EVENTS_LIMIT).await?;

    // Activity feed: 3 most recent per source, merged and truncated in core.
    let organized =
        DashboardRepo::organized_activity(&state.pool, user_id, ITEMS_PER_SOURCE).await?;
    let joined = DashboardRepo::joined_activity(&state.pool, user_id, ITEMS_PER_SOURCE).await?;
    let photos = DashboardRepo::photo_activity(&state.pool, user_id, ITEMS_PER_SOURCE).await?;

    let recent_activity = activity::merge_recent(vec![
        organized
            .into_iter()
            .map(|row| ActivityItem {
                kind: ActivityKind::Organized,
                description: format!("You organized \"{}\"", row.title),
                date: row.date,
            })
            .collect(),
        joined
            .into_iter()
            .map(|row| ActivityItem {
                kind: ActivityKind::Joined,
                description: format!("You joined \"{}\"", row.title),
                date: row.date,
            })
            .collect(),
        photos
            .into_iter()
            .map(|row| ActivityItem {
                kind: ActivityKind::UploadedPhoto,
                description: format!("You uploaded a photo to \"{}\"", row.title),
                date: row.date,
            })
            .collect(),
    ]);

    Ok(Json(DataResponse {
        data: DashboardResponse {
            events_organized: counts.events_organized,
            events_joined: counts.events_joined,
            photos_uploaded: counts.photos_uploaded,
            total_visits: counts.total_visits,
            organized_events,
            joined_events,
            recent_activity,
        },
    }))
}
