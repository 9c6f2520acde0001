//! Handlers for joining, leaving, and giving feedback on events.
//!
//! Join refusals (already joined, event full, event started) are expected
//! outcomes surfaced as 4xx responses, never 5xx.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ecoconnect_core::error::CoreError;
use ecoconnect_core::types::DbId;
use ecoconnect_db::models::participation::{FeedbackRequest, Participation};
use ecoconnect_db::repositories::{JoinOutcome, ParticipationRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/events/{id}/join
///
/// Join an event. The capacity check and insert run atomically in the
/// repository, so concurrent joins cannot overbook.
pub async fn join(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<DataResponse<Participation>>)> {
    let outcome =
        ParticipationRepo::join(&state.pool, auth.user_id, event_id, state.clock.now()).await?;

    let participation = match outcome {
        JoinOutcome::Joined(p) => p,
        JoinOutcome::AlreadyJoined => {
            return Err(AppError::Core(CoreError::Conflict(
                "You have already joined this event".into(),
            )))
        }
        JoinOutcome::EventFull => {
            return Err(AppError::Core(CoreError::Conflict("Event is full".into())))
        }
        JoinOutcome::EventStarted => {
            return Err(AppError::Core(CoreError::Validation(
                "This event has already started".into(),
            )))
        }
        JoinOutcome::EventMissing => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Event",
                id: event_id,
            }))
        }
    };

    tracing::info!(event_id, user_id = auth.user_id, "User joined event");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: participation,
        }),
    ))
}

/// POST /api/v1/events/{id}/leave
///
/// Leave an event. Fails when the user never joined.
pub async fn leave(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let left = ParticipationRepo::leave(&state.pool, auth.user_id, event_id).await?;

    if !left {
        return Err(AppError::Core(CoreError::Conflict(
            "You have not joined this event".into(),
        )));
    }

    tracing::info!(event_id, user_id = auth.user_id, "User left event");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/events/{id}/feedback
///
/// Record attendance and feedback on an existing participation.
pub async fn feedback(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
    Json(input): Json<FeedbackRequest>,
) -> AppResult<Json<DataResponse<Participation>>> {
    let participation =
        ParticipationRepo::set_feedback(&state.pool, auth.user_id, event_id, &input)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Conflict(
                    "You have not joined this event".into(),
                ))
            })?;

    tracing::info!(event_id, user_id = auth.user_id, "Feedback recorded");

    Ok(Json(DataResponse {
        data: participation,
    }))
}
