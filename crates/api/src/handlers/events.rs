//! Handlers for the `/events` resource: filtered listing and CRUD.
//!
//! Listing is public; mutation requires authentication, and edit/delete are
//! organizer-only, enforced here rather than at the data layer.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ecoconnect_core::error::CoreError;
use ecoconnect_core::filters::EventQuery;
use ecoconnect_core::types::DbId;
use ecoconnect_core::validation::{validate_event_fields, validate_start_time};
use ecoconnect_db::models::event::{
    CreateEvent, Event, EventDetail, EventPage, UpdateEvent,
};
use ecoconnect_db::repositories::{CategoryRepo, EventRepo, HistoryRepo, LocationRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, OptionalAuthUser};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /api/v1/events
///
/// Filtered, sorted, paginated event listing. All filters are optional and
/// combine with AND; malformed tokens are ignored rather than rejected.
pub async fn list(
    auth: OptionalAuthUser,
    State(state): State<AppState>,
    Query(query): Query<EventQuery>,
) -> AppResult<Json<DataResponse<EventPage>>> {
    let filters = query.resolve(state.clock.now());

    let events = EventRepo::search(&state.pool, &filters).await?;
    let total_count = EventRepo::count_search(&state.pool, &filters).await?;

    // Log keyword searches for authenticated users (fire-and-forget; a
    // logging failure never fails the request).
    if let (OptionalAuthUser(Some(user)), Some(keyword)) = (&auth, &filters.keyword) {
        let _ =
            HistoryRepo::record_search(&state.pool, Some(user.user_id), keyword, total_count)
                .await;
    }

    tracing::debug!(
        keyword = ?filters.keyword,
        results = total_count,
        page = filters.page,
        "Event listing executed",
    );

    Ok(Json(DataResponse {
        data: EventPage::new(events, total_count, filters.page),
    }))
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/events
///
/// Create an event. The authenticated user becomes the organizer.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<DataResponse<Event>>)> {
    validate_event_fields(&input.title, &input.description, input.capacity)?;
    validate_start_time(input.start_time, state.clock.now())?;
    ensure_references_exist(&state, input.category_id, input.location_id).await?;

    let event = EventRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(event_id = event.id, organizer_id = auth.user_id, "Event created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// GET /api/v1/events/{id}
///
/// Event detail: joined reference names, live participant count, and tags.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<EventDetail>>> {
    let event = EventRepo::find_summary_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;
    let tags = EventRepo::list_tags(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: EventDetail { event, tags },
    }))
}

/// PUT /api/v1/events/{id}
///
/// Update an event. Organizer only.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<Json<DataResponse<Event>>> {
    let existing = require_organizer(&state, id, &auth).await?;

    // Validate the merged field set so a partial update cannot slip past
    // the rules that applied at creation. The start-time rule only applies
    // when the start time itself is being moved.
    let title = input.title.as_deref().unwrap_or(&existing.title);
    let description = input
        .description
        .as_deref()
        .unwrap_or(&existing.description);
    let capacity = input.capacity.unwrap_or(existing.capacity);
    validate_event_fields(title, description, capacity)?;
    if let Some(start_time) = input.start_time {
        validate_start_time(start_time, state.clock.now())?;
    }

    if let Some(category_id) = input.category_id {
        ensure_references_exist(&state, category_id, existing.location_id).await?;
    }
    if let Some(location_id) = input.location_id {
        ensure_references_exist(&state, existing.category_id, location_id).await?;
    }

    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;

    tracing::info!(event_id = id, user_id = auth.user_id, "Event updated");

    Ok(Json(DataResponse { data: event }))
}

/// DELETE /api/v1/events/{id}
///
/// Delete an event and cascade its participations and photos. Organizer only.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    require_organizer(&state, id, &auth).await?;

    let deleted = EventRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }));
    }

    tracing::info!(event_id = id, user_id = auth.user_id, "Event deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load an event and reject with 403 unless the caller organizes it.
async fn require_organizer(
    state: &AppState,
    event_id: DbId,
    auth: &AuthUser,
) -> AppResult<Event> {
    let event = EventRepo::find_by_id(&state.pool, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;

    if event.organizer_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the organizer can modify this event".into(),
        )));
    }

    Ok(event)
}

/// Reject with a field-level message when a referenced registry row is missing.
async fn ensure_references_exist(
    state: &AppState,
    category_id: DbId,
    location_id: DbId,
) -> AppResult<()> {
    if CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::Validation(
            "Unknown category".into(),
        )));
    }
    if LocationRepo::find_by_id(&state.pool, location_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::Validation(
            "Unknown location".into(),
        )));
    }
    Ok(())
}
