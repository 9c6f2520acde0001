//! Route definitions.

pub mod auth;
pub mod catalog;
pub mod events;
pub mod health;
pub mod interaction;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
/// /auth/refresh                  refresh (public)
/// /auth/logout                   logout (requires auth)
///
/// /home                          featured events + counts (public)
///
/// /events                        filtered listing (GET), create (POST, auth)
/// /events/{id}                   get, update, delete (mutations organizer-only)
/// /events/{id}/join              join (POST, auth)
/// /events/{id}/leave             leave (POST, auth)
/// /events/{id}/feedback          attendance + feedback (POST, auth)
/// /events/{id}/photos            event photo list (GET)
///
/// /categories                    list (GET), create (POST, admin)
/// /locations                     list (GET), create (POST, admin)
/// /tags                          list (GET), create (POST, admin)
///
/// /interaction/dashboard         personal dashboard (GET, auth)
/// /interaction/upload            photo upload (POST multipart, auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(handlers::home::home))
        .nest("/auth", auth::router())
        .nest("/events", events::router())
        .merge(catalog::router())
        .nest("/interaction", interaction::router())
}
