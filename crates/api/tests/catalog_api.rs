//! Integration tests for the reference registries.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, login, make_admin, post_json, register_and_login};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn registry_listings_are_public(pool: PgPool) {
    common::seed_category(&pool, "Cleanup").await;
    common::seed_location(&pool, "Riverside Park").await;
    let app = common::build_test_app(pool);

    for uri in ["/api/v1/categories", "/api/v1/locations", "/api/v1/tags"] {
        let response = get(app.clone(), uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get(app.clone(), "/api/v1/categories", None).await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["name"], "Cleanup");
    assert_eq!(json["data"][0]["color_code"], "#28a745");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn registry_creation_is_admin_only(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let member = register_and_login(&app, "member").await;
    let response = post_json(
        app.clone(),
        "/api/v1/categories",
        json!({"name": "Wildlife"}),
        Some(&member),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    register_and_login(&app, "admin").await;
    make_admin(&pool, "admin").await;
    // Role lives in the JWT; log in again to pick it up.
    let admin = login(&app, "admin").await;

    let response = post_json(
        app.clone(),
        "/api/v1/categories",
        json!({"name": "Wildlife", "description": "Habitat and conservation"}),
        Some(&admin),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        app.clone(),
        "/api/v1/locations",
        json!({"name": "Harbor Beach", "latitude": 43.85, "longitude": -78.94}),
        Some(&admin),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        app.clone(),
        "/api/v1/tags",
        json!({"name": "family-friendly"}),
        Some(&admin),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["data"]["color_code"], "#6c757d");

    // Duplicate names conflict.
    let response = post_json(
        app.clone(),
        "/api/v1/tags",
        json!({"name": "family-friendly"}),
        Some(&admin),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
