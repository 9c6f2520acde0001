//! Health check handler.

use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::state::AppState;

/// GET /health
///
/// Liveness probe: reports the crate version and whether the database
/// answers a trivial query.
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let db_healthy = ecoconnect_db::health_check(&state.pool).await.is_ok();

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "db_healthy": db_healthy,
    }))
}
