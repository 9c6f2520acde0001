//! Repository for the `events` table and its tag links.
//!
//! The listing query translates an [`EventFilters`] value into a single
//! statement: every optional predicate is NULL-guarded
//! (`($n::TEXT IS NULL OR ...)`) so the bind set is fixed regardless of
//! which filters are present, and only the `ORDER BY` clause is selected
//! in Rust.

use ecoconnect_core::filters::{Availability, EventFilters, SortKey, EVENTS_PER_PAGE};
use ecoconnect_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, EventSummary, UpdateEvent};
use crate::models::tag::EventTag;

/// Column list for `events` queries.
const EVENT_COLUMNS: &str = "\
    id, title, description, start_time, location_id, address, \
    organizer_id, category_id, capacity, status, created_at, updated_at";

/// Joined projection shared by the listing, detail, and featured queries.
/// The participant count is computed live from participation rows.
const SUMMARY_SELECT: &str = "\
    SELECT e.id, e.title, e.description, e.start_time, e.address, \
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
    ) pc";

/// NULL-guarded predicate set matching [`EventFilters`].
///
/// Binds: $1 keyword, $2 category, $3 location, $4 window start,
/// $5 window end, $6 status, $7 availability token.
const FILTER_WHERE: &str = "\
    WHERE ($1::TEXT IS NULL \
           OR e.title ILIKE '%' || $1 || '%' \
           OR e.description ILIKE '%' || $1 || '%' \
           OR e.address ILIKE '%' || $1 || '%' \
           OR l.name ILIKE '%' || $1 || '%' \
           OR u.username ILIKE '%' || $1 || '%') \
      AND ($2::TEXT IS NULL OR c.name ILIKE $2) \
      AND ($3::TEXT IS NULL OR l.name ILIKE $3) \
      AND ($4::TIMESTAMPTZ IS NULL OR (e.start_time >= $4 AND e.start_time < $5)) \
      AND ($6::TEXT IS NULL OR e.status::TEXT = $6) \
      AND ($7::TEXT IS NULL \
           OR ($7 = 'available' AND pc.participant_count < e.capacity) \
           OR ($7 = 'full' AND pc.participant_count >= e.capacity))";

/// Number of featured events on the home page.
const FEATURED_LIMIT: i64 = 3;

/// Provides CRUD and filtered listing over events.
pub struct EventRepo;

impl EventRepo {
    // -----------------------------------------------------------------------
    // Filtered listing
    // -----------------------------------------------------------------------

    /// Execute the filtered, sorted, paginated listing query.
    pub async fn search(
        pool: &PgPool,
        filters: &EventFilters,
    ) -> Result<Vec<EventSummary>, sqlx::Error> {
        let order_by = match filters.sort {
            SortKey::Title => "e.title ASC, e.id ASC",
            SortKey::Participants => "pc.participant_count DESC, e.start_time ASC",
            SortKey::Created => "e.created_at DESC, e.id DESC",
            SortKey::Date => "e.start_time ASC, e.id ASC",
        };

        let query = format!(
            "{SUMMARY_SELECT} {FILTER_WHERE} ORDER BY {order_by} LIMIT $8 OFFSET $9"
        );

        bind_filters(sqlx::query_as::<_, EventSummary>(&query), filters)
            .bind(EVENTS_PER_PAGE)
            .bind(filters.offset())
            .fetch_all(pool)
            .await
    }

    /// Count all events matching the filter set (for pagination metadata).
    pub async fn count_search(
        pool: &PgPool,
        filters: &EventFilters,
    ) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) \
             FROM events e \
             JOIN event_categories c ON c.id = e.category_id \
             JOIN locations l ON l.id = e.location_id \
             JOIN users u ON u.id = e.organizer_id \
             CROSS JOIN LATERAL ( \
                 SELECT COUNT(*) AS participant_count \
                 FROM event_participations p \
                 WHERE p.event_id = e.id \
             ) pc \
             {FILTER_WHERE}"
        );

        let (count,) = bind_filters(sqlx::query_as::<_, (i64,)>(&query), filters)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    // -----------------------------------------------------------------------
    // CRUD
    // -----------------------------------------------------------------------

    /// Insert an event and its tag links in one transaction.
    pub async fn create(
        pool: &PgPool,
        organizer_id: DbId,
        input: &CreateEvent,
    ) -> Result<Event, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO events \
                 (title, description, start_time, location_id, address, \
                  organizer_id, category_id, capacity) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {EVENT_COLUMNS}"
        );
        let event = sqlx::query_as::<_, Event>(&query)
            .bind(input.title.trim())
            .bind(input.description.trim())
            .bind(input.start_time)
            .bind(input.location_id)
            .bind(input.address.trim())
            .bind(organizer_id)
            .bind(input.category_id)
            .bind(input.capacity)
            .fetch_one(&mut *tx)
            .await?;

        for tag_id in &input.tag_ids {
            sqlx::query(
                "INSERT INTO events_tags (event_id, tag_id) VALUES ($1, $2) \
                 ON CONFLICT ON CONSTRAINT uq_events_tags_pair DO NOTHING",
            )
            .bind(event.id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(event)
    }

    /// Find an event row by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the joined summary projection for a single event.
    pub async fn find_summary_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EventSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE e.id = $1");
        sqlx::query_as::<_, EventSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an event's mutable fields; `None` fields are left unchanged.
    ///
    /// When `tag_ids` is present the tag set is replaced wholesale.
    /// Returns `None` if no event with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE events SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 start_time = COALESCE($4, start_time), \
                 location_id = COALESCE($5, location_id), \
                 address = COALESCE($6, address), \
                 category_id = COALESCE($7, category_id), \
                 capacity = COALESCE($8, capacity), \
                 status = COALESCE($9, status), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {EVENT_COLUMNS}"
        );
        let event = sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(input.description.as_deref().map(str::trim))
            .bind(input.start_time)
            .bind(input.location_id)
            .bind(input.address.as_deref().map(str::trim))
            .bind(input.category_id)
            .bind(input.capacity)
            .bind(input.status)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(event) = event else {
            return Ok(None);
        };

        if let Some(tag_ids) = &input.tag_ids {
            sqlx::query("DELETE FROM events_tags WHERE event_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            for tag_id in tag_ids {
                sqlx::query("INSERT INTO events_tags (event_id, tag_id) VALUES ($1, $2)")
                    .bind(id)
                    .bind(tag_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;
        Ok(Some(event))
    }

    /// Delete an event. Participations, photos, and tag links cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Tags
    // -----------------------------------------------------------------------

    /// List the tags attached to an event, alphabetically.
    pub async fn list_tags(pool: &PgPool, event_id: DbId) -> Result<Vec<EventTag>, sqlx::Error> {
        sqlx::query_as::<_, EventTag>(
            "SELECT t.id, t.name, t.description, t.color_code \
             FROM event_tags t \
             JOIN events_tags et ON et.tag_id = t.id \
             WHERE et.event_id = $1 \
             ORDER BY t.name",
        )
        .bind(event_id)
        .fetch_all(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Home page
    // -----------------------------------------------------------------------

    /// The next few upcoming events starting at or after `now`.
    pub async fn featured(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<EventSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} \
             WHERE e.start_time >= $1 AND e.status = 'upcoming' \
             ORDER BY e.start_time ASC \
             LIMIT $2"
        );
        sqlx::query_as::<_, EventSummary>(&query)
            .bind(now)
            .bind(FEATURED_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Total number of events.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(pool)
            .await
    }

    /// Number of events currently marked upcoming.
    pub async fn count_upcoming(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM events WHERE status = 'upcoming'")
            .fetch_one(pool)
            .await
    }
}

/// Bind the fixed filter parameter set ($1..$7) shared by the listing and
/// count queries.
fn bind_filters<'q, O>(
    query: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    filters: &'q EventFilters,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    let availability = filters.availability.map(|a| match a {
        Availability::Available => "available",
        Availability::Full => "full",
    });

    query
        .bind(filters.keyword.as_deref())
        .bind(filters.category.as_deref())
        .bind(filters.location.as_deref())
        .bind(filters.window.map(|w| w.from))
        .bind(filters.window.map(|w| w.until))
        .bind(filters.status.as_deref())
        .bind(availability)
}
