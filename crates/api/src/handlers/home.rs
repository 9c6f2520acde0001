//! Handler for the home page data.

use axum::extract::State;
use axum::Json;
use ecoconnect_db::models::event::EventSummary;
use ecoconnect_db::repositories::EventRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Home page payload: featured events plus headline counts.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub featured_events: Vec<EventSummary>,
    pub total_events: i64,
    pub upcoming_events: i64,
}

/// GET /api/v1/home
///
/// The three soonest upcoming events starting at or after now, with the
/// total and upcoming event counts.
pub async fn home(State(state): State<AppState>) -> AppResult<Json<DataResponse<HomeResponse>>> {
    let now = state.clock.now();

    let featured_events = EventRepo::featured(&state.pool, now).await?;
    let total_events = EventRepo::count_all(&state.pool).await?;
    let upcoming_events = EventRepo::count_upcoming(&state.pool).await?;

    Ok(Json(DataResponse {
        data: HomeResponse {
            featured_events,
            total_events,
            upcoming_events,
        },
    }))
}
