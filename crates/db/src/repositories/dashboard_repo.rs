//! Aggregate queries backing the user dashboard.

use ecoconnect_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::event::EventSummary;

/// Per-user dashboard counters, computed live.
#[derive(Debug, sqlx::FromRow)]
pub struct DashboardCounts {
    pub events_organized: i64,
    pub events_joined: i64,
    pub photos_uploaded: i64,
    pub total_visits: i64,
}

/// A `(title, timestamp)` pair feeding the recent-activity merge.
#[derive(Debug, sqlx::FromRow)]
pub struct ActivityRow {
    pub title: String,
    pub date: Timestamp,
}

/// Provides read-only dashboard aggregation.
pub struct DashboardRepo;

impl DashboardRepo {
    /// All four counters in one round trip.
    pub async fn counts(pool: &PgPool, user_id: DbId) -> Result<DashboardCounts, sqlx::Error> {
        sqlx::query_as::<_, DashboardCounts>(
            "SELECT \
                 (SELECT COUNT(*) FROM events WHERE organizer_id = $1) AS events_organized, \
                 (SELECT COUNT(*) FROM event_participations WHERE user_id = $1) AS events_joined, \
                 (SELECT COUNT(*) FROM photo_uploads WHERE user_id = $1) AS photos_uploaded, \
                 (SELECT COUNT(*) FROM page_visits WHERE user_id = $1) AS total_visits",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// The user's most recent organized events (by start time).
    pub async fn recent_organized(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<EventSummary>, sqlx::Error> {
        sqlx::query_as::<_, EventSummary>(
            "SELECT e.id, e.title, e.description, e.start_time, e.address, \
                    e.capacity, e.status, e.created_at, \
                    c.id AS category_id, c.name AS category_name, c.color_code AS category_color, \
                    l.id AS location_id, l.name AS location_name, \
                    u.id AS organizer_id, u.username AS organizer_name, \
                    pc.participant_count \
             FROM events e \
             JOIN event_categories c ON c.id = e.category_id \
             JOIN locations l ON l.id = e.location_id \
             JOIN users u ON u.id = e.organizer_id \
             CROSS JOIN LATERAL ( \
                 SELECT COUNT(*) AS participant_count \
                 FROM event_participations p \
                 WHERE p.event_id = e.id \
             ) pc \
             WHERE e.organizer_id = $1 \
             ORDER BY e.start_time DESC \
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Activity feed sources (each cut to its own recency limit; the merge
    // happens in core::activity)
    // -----------------------------------------------------------------------

    /// Titles of the user's most recently created events.
    pub async fn organized_activity(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<ActivityRow>, sqlx::Error> {
        sqlx::query_as::<_, ActivityRow>(
            "SELECT title, created_at AS date FROM events \
             WHERE organizer_id = $1 \
             ORDER BY created_at DESC \
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Titles of the events the user most recently joined.
    pub async fn joined_activity(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<ActivityRow>, sqlx::Error> {
        sqlx::query_as::<_, ActivityRow>(
            "SELECT e.title, p.joined_at AS date \
             FROM event_participations p \
             JOIN events e ON e.id = p.event_id \
             WHERE p.user_id = $1 \
             ORDER BY p.joined_at DESC \
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Titles of the events the user most recently uploaded photos to.
    pub async fn photo_activity(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<ActivityRow>, sqlx::Error> {
        sqlx::query_as::<_, ActivityRow>(
            "SELECT e.title, ph.uploaded_at AS date \
             FROM photo_uploads ph \
             JOIN events e ON e.id = ph.event_id \
             WHERE ph.user_id = $1 \
             ORDER BY ph.uploaded_at DESC \
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
