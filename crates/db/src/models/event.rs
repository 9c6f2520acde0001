//! Event entity model, listing projection, and DTOs.

use ecoconnect_core::filters::EVENTS_PER_PAGE;
use ecoconnect_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::tag::EventTag;

/// Event lifecycle state, stored as the `event_status` Postgres enum.
///
/// Transitions are manual (set by the organizer); there is no clock-driven
/// state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "event_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
}

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub start_time: Timestamp,
    pub location_id: DbId,
    pub address: String,
    pub organizer_id: DbId,
    pub category_id: DbId,
    pub capacity: i32,
    pub status: EventStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Listing/detail projection: an event joined with its reference names and
/// the live participant count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventSummary {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub start_time: Timestamp,
    pub address: String,
    pub capacity: i32,
    pub status: EventStatus,
    pub created_at: Timestamp,
    pub category_id: DbId,
    pub category_name: String,
    pub category_color: String,
    pub location_id: DbId,
    pub location_name: String,
    pub organizer_id: DbId,
    pub organizer_name: String,
    /// Live count of participation rows, never a stored counter.
    pub participant_count: i64,
}

/// Event detail: summary plus the tag set.
#[derive(Debug, Clone, Serialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: EventSummary,
    pub tags: Vec<EventTag>,
}

/// One page of listing results with pagination metadata.
#[derive(Debug, Serialize)]
pub struct EventPage {
    pub events: Vec<EventSummary>,
    pub total_count: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl EventPage {
    pub fn new(events: Vec<EventSummary>, total_count: i64, page: i64) -> Self {
        let total_pages = ((total_count + EVENTS_PER_PAGE - 1) / EVENTS_PER_PAGE).max(1);
        Self {
            events,
            total_count,
            page,
            page_size: EVENTS_PER_PAGE,
            total_pages,
        }
    }
}

/// DTO for creating a new event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub start_time: Timestamp,
    pub location_id: DbId,
    #[serde(default)]
    pub address: String,
    pub category_id: DbId,
    pub capacity: i32,
    /// Tags to attach; missing ids are rejected by the foreign key.
    #[serde(default)]
    pub tag_ids: Vec<DbId>,
}

/// DTO for updating an existing event. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<Timestamp>,
    pub location_id: Option<DbId>,
    pub address: Option<String>,
    pub category_id: Option<DbId>,
    pub capacity: Option<i32>,
    pub status: Option<EventStatus>,
    /// When present, replaces the full tag set.
    pub tag_ids: Option<Vec<DbId>>,
}
