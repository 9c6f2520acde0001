//! Handlers for the reference registries: categories, locations, and tags.
//!
//! Listing is public (the filter UI needs it); creation is admin-only.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ecoconnect_db::models::category::{CreateCategory, EventCategory};
use ecoconnect_db::models::location::{CreateLocation, Location};
use ecoconnect_db::models::tag::{CreateTag, EventTag};
use ecoconnect_db::repositories::{CategoryRepo, LocationRepo, TagRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /api/v1/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<EventCategory>>>> {
    let categories = CategoryRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/categories (admin only)
pub async fn create_category(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<DataResponse<EventCategory>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }

    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, user_id = admin.user_id, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// GET /api/v1/locations
pub async fn list_locations(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Location>>>> {
    let locations = LocationRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: locations }))
}

/// POST /api/v1/locations (admin only)
pub async fn create_location(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateLocation>,
) -> AppResult<(StatusCode, Json<DataResponse<Location>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }

    let location = LocationRepo::create(&state.pool, &input).await?;

    tracing::info!(location_id = location.id, user_id = admin.user_id, "Location created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: location })))
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// GET /api/v1/tags
pub async fn list_tags(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<EventTag>>>> {
    let tags = TagRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: tags }))
}

/// POST /api/v1/tags (admin only)
pub async fn create_tag(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTag>,
) -> AppResult<(StatusCode, Json<DataResponse<EventTag>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }

    let tag = TagRepo::create(&state.pool, &input).await?;

    tracing::info!(tag_id = tag.id, user_id = admin.user_id, "Tag created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: tag })))
}
