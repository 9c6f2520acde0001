//! Repository for the `event_participations` table.
//!
//! The join operation is the one read-modify-write sequence in the system.
//! It runs in a transaction that locks the event row (`FOR UPDATE`) before
//! checking capacity, so concurrent joins against the same event serialize
//! and overbooking cannot occur. The `(user_id, event_id)` unique
//! constraint backstops duplicate joins.

use ecoconnect_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::participation::{FeedbackRequest, JoinedEvent, Participation};

/// Column list for `event_participations` queries.
const PARTICIPATION_COLUMNS: &str = "\
    id, user_id, event_id, joined_at, attended, feedback";

/// Result of a join attempt. Refusals are expected outcomes, not errors.
#[derive(Debug)]
pub enum JoinOutcome {
    Joined(Participation),
    AlreadyJoined,
    EventFull,
    EventStarted,
    EventMissing,
}

/// Event fields read under the row lock.
#[derive(Debug, sqlx::FromRow)]
struct LockedEvent {
    start_time: Timestamp,
    capacity: i32,
}

/// Provides join/leave/feedback operations over participations.
pub struct ParticipationRepo;

impl ParticipationRepo {
    /// Attempt to join an event as of `now`.
    ///
    /// Refuses when the event does not exist, has already started, is at
    /// capacity, or the user already holds a participation row. All checks
    /// run inside the event-row lock.
    pub async fn join(
        pool: &PgPool,
        user_id: DbId,
        event_id: DbId,
        now: Timestamp,
    ) -> Result<JoinOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let event = sqlx::query_as::<_, LockedEvent>(
            "SELECT start_time, capacity FROM events WHERE id = $1 FOR UPDATE",
        )
        .bind(event_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(event) = event else {
            return Ok(JoinOutcome::EventMissing);
        };

        if event.start_time <= now {
            return Ok(JoinOutcome::EventStarted);
        }

        let already: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM event_participations WHERE user_id = $1 AND event_id = $2",
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_optional(&mut *tx)
        .await?;

        if already.is_some() {
            return Ok(JoinOutcome::AlreadyJoined);
        }

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM event_participations WHERE event_id = $1",
        )
        .bind(event_id)
        .fetch_one(&mut *tx)
        .await?;

        if count >= i64::from(event.capacity) {
            return Ok(JoinOutcome::EventFull);
        }

        let query = format!(
            "INSERT INTO event_participations (user_id, event_id, joined_at) \
             VALUES ($1, $2, $3) \
             RETURNING {PARTICIPATION_COLUMNS}"
        );
        let participation = sqlx::query_as::<_, Participation>(&query)
            .bind(user_id)
            .bind(event_id)
            .bind(now)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(JoinOutcome::Joined(participation))
    }

    /// Leave an event. Returns `false` when no participation row existed.
    pub async fn leave(
        pool: &PgPool,
        user_id: DbId,
        event_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM event_participations WHERE user_id = $1 AND event_id = $2")
                .bind(user_id)
                .bind(event_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a user's participation in an event.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        event_id: DbId,
    ) -> Result<Option<Participation>, sqlx::Error> {
        let query = format!(
            "SELECT {PARTICIPATION_COLUMNS} FROM event_participations \
             WHERE user_id = $1 AND event_id = $2"
        );
        sqlx::query_as::<_, Participation>(&query)
            .bind(user_id)
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }

    /// Record attendance and feedback on an existing participation.
    ///
    /// Returns `None` when the user never joined the event.
    pub async fn set_feedback(
        pool: &PgPool,
        user_id: DbId,
        event_id: DbId,
        input: &FeedbackRequest,
    ) -> Result<Option<Participation>, sqlx::Error> {
        let query = format!(
            "UPDATE event_participations \
             SET attended = $3, feedback = $4 \
             WHERE user_id = $1 AND event_id = $2 \
             RETURNING {PARTICIPATION_COLUMNS}"
        );
        sqlx::query_as::<_, Participation>(&query)
            .bind(user_id)
            .bind(event_id)
            .bind(input.attended)
            .bind(input.feedback.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Live participant count for an event.
    pub async fn count_for_event(pool: &PgPool, event_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM event_participations WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(pool)
            .await
    }

    /// The user's most recently joined events, for the dashboard.
    pub async fn recent_joined(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<JoinedEvent>, sqlx::Error> {
        sqlx::query_as::<_, JoinedEvent>(
            "SELECT p.event_id, e.title, e.start_time, p.joined_at, p.attended \
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
}
