//! Routes for user interaction features, mounted at `/interaction`.
//!
//! ```text
//! GET  /dashboard  -> dashboard (requires auth)
//! POST /upload     -> photo upload (requires auth, multipart)
//! ```

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use ecoconnect_core::validation::MAX_PHOTO_BYTES;

use crate::handlers::{dashboard, photos};
use crate::state::AppState;

/// Multipart framing overhead allowed on top of the photo size ceiling.
const UPLOAD_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::dashboard))
        .route(
            "/upload",
            post(photos::upload)
                // Axum's default body cap is below the photo ceiling.
                .layer(DefaultBodyLimit::max(MAX_PHOTO_BYTES + UPLOAD_OVERHEAD_BYTES)),
        )
}
