//! Routes for the event resource, mounted at `/events`.
//!
//! ```text
//! GET    /                 -> list (filtered, paginated)
//! POST   /                 -> create (requires auth)
//! GET    /{id}             -> get_by_id
//! PUT    /{id}             -> update (organizer only)
//! DELETE /{id}             -> delete (organizer only)
//! POST   /{id}/join        -> join
//! POST   /{id}/leave       -> leave
//! POST   /{id}/feedback    -> feedback
//! GET    /{id}/photos      -> event photo list
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{events, participation, photos};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list).post(events::create))
        .route(
            "/{id}",
            get(events::get_by_id)
                .put(events::update)
                .delete(events::delete),
        )
        .route("/{id}/join", post(participation::join))
        .route("/{id}/leave", post(participation::leave))
        .route("/{id}/feedback", post(participation::feedback))
        .route("/{id}/photos", get(photos::list_for_event))
}
