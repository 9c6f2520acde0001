//! Routes for the reference registries, mounted at the API root.
//!
//! ```text
//! GET  /categories   -> list_categories
//! POST /categories   -> create_category (admin only)
//! GET  /locations    -> list_locations
//! POST /locations    -> create_location (admin only)
//! GET  /tags         -> list_tags
//! POST /tags         -> create_tag (admin only)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(catalog::list_categories).post(catalog::create_category),
        )
        .route(
            "/locations",
            get(catalog::list_locations).post(catalog::create_location),
        )
        .route("/tags", get(catalog::list_tags).post(catalog::create_tag))
}
