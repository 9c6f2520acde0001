//! Shared fixtures for repository integration tests.
//!
//! Rows are inserted directly so each test controls its data without going
//! through the repositories under test.

#![allow(dead_code)] // Each integration test binary uses a subset.

use chrono::{Duration, TimeZone, Utc};
use ecoconnect_core::types::{DbId, Timestamp};
use sqlx::PgPool;

/// Fixed "now" used across repository tests: 2025-06-15 12:00 UTC.
pub fn now() -> Timestamp {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

pub async fn create_user(pool: &PgPool, username: &str) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO users (username, email, password_hash) \
         VALUES ($1, $2, 'x') RETURNING id",
    )
    .bind(username)
    .bind(format!("{username}@example.com"))
    .fetch_one(pool)
    .await
    .expect("insert user")
}

pub async fn create_category(pool: &PgPool, name: &str) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO event_categories (name, description) VALUES ($1, '') RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("insert category")
}

pub async fn create_location(pool: &PgPool, name: &str) -> DbId {
    sqlx::query_scalar("INSERT INTO locations (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("insert location")
}

/// Everything an event insert needs, with knobs for the fields tests vary.
pub struct EventFixture {
    pub title: String,
    pub description: String,
    pub address: String,
    pub start_time: Timestamp,
    pub capacity: i32,
    pub status: String,
    pub organizer_id: DbId,
    pub category_id: DbId,
    pub location_id: DbId,
}

impl EventFixture {
    pub fn new(organizer_id: DbId, category_id: DbId, location_id: DbId) -> Self {
        Self {
            title: "Community Tree Planting".into(),
            description: "Help us plant native trees along the river trail.".into(),
            address: "12 River Trail".into(),
            start_time: now() + Duration::days(7),
            capacity: 50,
            status: "upcoming".into(),
            organizer_id,
            category_id,
            location_id,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.into();
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = address.into();
        self
    }

    pub fn start_time(mut self, start_time: Timestamp) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    pub async fn insert(self, pool: &PgPool) -> DbId {
        sqlx::query_scalar(
            "INSERT INTO events \
                 (title, description, start_time, location_id, address, \
                  organizer_id, category_id, capacity, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9::event_status) \
             RETURNING id",
        )
        .bind(&self.title)
        .bind(&self.description)
        .bind(self.start_time)
        .bind(self.location_id)
        .bind(&self.address)
        .bind(self.organizer_id)
        .bind(self.category_id)
        .bind(self.capacity)
        .bind(&self.status)
        .fetch_one(pool)
        .await
        .expect("insert event")
    }
}

/// Insert a participation row directly (bypassing the join guard).
pub async fn add_participant(pool: &PgPool, user_id: DbId, event_id: DbId) {
    sqlx::query(
        "INSERT INTO event_participations (user_id, event_id, joined_at) VALUES ($1, $2, $3)",
    )
    .bind(user_id)
    .bind(event_id)
    .bind(now())
    .execute(pool)
    .await
    .expect("insert participation");
}
