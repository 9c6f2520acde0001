//! Shared helpers for API integration tests.
//!
//! `build_test_app` mirrors the router construction in `main.rs` so tests
//! exercise the same middleware stack (CORS, request ID, timeout, tracing,
//! panic recovery) that production uses.

#![allow(dead_code)] // Each integration test binary uses a subset.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use chrono::Utc;
use ecoconnect_core::clock::SystemClock;
use ecoconnect_core::types::DbId;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use ecoconnect_api::auth::jwt::JwtConfig;
use ecoconnect_api::config::ServerConfig;
use ecoconnect_api::routes;
use ecoconnect_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        media_dir: std::env::temp_dir()
            .join("ecoconnect-test-media")
            .to_string_lossy()
            .into_owned(),
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        clock: Arc::new(SystemClock),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request, optionally authenticated.
pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a JSON request with the given method, optionally authenticated.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Send a POST request with a JSON body, optionally authenticated.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    send_json(app, Method::POST, uri, body, token).await
}

/// Send a bodyless POST request, optionally authenticated.
pub async fn post_empty(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// Register an account and log in; returns the access token.
pub async fn register_and_login(app: &Router, username: &str) -> String {
    let response = post_json(
        app.clone(),
        "/api/v1/auth/register",
        serde_json::json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "correct-horse-battery",
        }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    login(app, username).await
}

/// Log an existing account in; returns the access token.
pub async fn login(app: &Router, username: &str) -> String {
    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        serde_json::json!({
            "username": username,
            "password": "correct-horse-battery",
        }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    json["data"]["access_token"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Seed helpers (direct inserts; the registries are admin-gated over HTTP)
// ---------------------------------------------------------------------------

pub async fn seed_category(pool: &PgPool, name: &str) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO event_categories (name, description) VALUES ($1, '') RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("insert category")
}

pub async fn seed_location(pool: &PgPool, name: &str) -> DbId {
    sqlx::query_scalar("INSERT INTO locations (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("insert location")
}

/// Promote an account to admin (role checks read the JWT, so log in after).
pub async fn make_admin(pool: &PgPool, username: &str) {
    sqlx::query("UPDATE users SET role = 'admin' WHERE username = $1")
        .bind(username)
        .execute(pool)
        .await
        .expect("promote user");
}

/// A valid create-event body one week out.
pub fn event_body(category_id: DbId, location_id: DbId) -> serde_json::Value {
    serde_json::json!({
        "title": "Community Tree Planting",
        "description": "Help us plant native trees along the river trail.",
        "start_time": (Utc::now() + chrono::Duration::days(7)).to_rfc3339(),
        "location_id": location_id,
        "address": "12 River Trail",
        "category_id": category_id,
        "capacity": 25,
    })
}

/// Create an event over HTTP and return its id.
pub async fn create_event(
    app: &Router,
    token: &str,
    category_id: DbId,
    location_id: DbId,
) -> DbId {
    let response = post_json(
        app.clone(),
        "/api/v1/events",
        event_body(category_id, location_id),
        Some(token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}
