//! Event listing filter model.
//!
//! This module lives in `core` (zero internal deps) so the same parsing
//! rules serve the API layer and any future CLI tooling. Raw query
//! parameters are resolved exactly once, at the request boundary, into a
//! typed [`EventFilters`] value. Unknown tokens and unparseable dates never
//! raise an error; they resolve to "no such filter applied".

use chrono::{Datelike, Days, NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Events shown per listing page.
pub const EVENTS_PER_PAGE: i64 = 6;

// ---------------------------------------------------------------------------
// Status tokens
// ---------------------------------------------------------------------------

/// Recognized event lifecycle states, as stored in the `event_status` enum.
pub const EVENT_STATUSES: &[&str] = &["upcoming", "ongoing", "completed"];

/// Check whether a status token names a real lifecycle state.
pub fn is_valid_status(token: &str) -> bool {
    EVENT_STATUSES.contains(&token)
}

// ---------------------------------------------------------------------------
// Raw query parameters
// ---------------------------------------------------------------------------

/// Raw `/events` query parameters, straight from the URL.
///
/// Everything is optional and untrusted; call [`EventQuery::resolve`] to
/// obtain the validated filter set.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct EventQuery {
    /// Free-text keyword, matched across several fields.
    pub search: Option<String>,
    /// Category name (exact, case-insensitive).
    pub category: Option<String>,
    /// Location name (exact, case-insensitive).
    pub location: Option<String>,
    /// Exact calendar day, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Named range token: `today`, `week`, `month`, or `custom`.
    pub date_range: Option<String>,
    /// Custom range start, `YYYY-MM-DD`. Only read when `date_range=custom`.
    pub start_date: Option<String>,
    /// Custom range end, `YYYY-MM-DD`. Only read when `date_range=custom`.
    pub end_date: Option<String>,
    /// Lifecycle status token.
    pub status: Option<String>,
    /// `available` or `full`.
    pub availability: Option<String>,
    /// `title`, `participants`, or `created`; anything else sorts by date.
    pub sort: Option<String>,
    /// 1-based page number.
    pub page: Option<i64>,
}

// ---------------------------------------------------------------------------
// Resolved filter types
// ---------------------------------------------------------------------------

/// Availability predicate comparing live participant count to capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Participant count strictly below capacity.
    Available,
    /// Participant count at or above capacity.
    Full,
}

impl Availability {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "available" => Some(Self::Available),
            "full" => Some(Self::Full),
            _ => None,
        }
    }
}

/// Result ordering. `Date` (soonest start first) is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Date,
    /// Lexicographic ascending by title.
    Title,
    /// Descending by live participant count.
    Participants,
    /// Descending by creation time.
    Created,
}

impl SortKey {
    fn parse(token: Option<&str>) -> Self {
        match token {
            Some("title") => Self::Title,
            Some("participants") => Self::Participants,
            Some("created") => Self::Created,
            _ => Self::Date,
        }
    }
}

/// A half-open `[from, until)` window over event start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: Timestamp,
    pub until: Timestamp,
}

impl DateWindow {
    /// Window covering `first` through `last`, both days inclusive.
    fn spanning(first: NaiveDate, last: NaiveDate) -> Option<Self> {
        let until_day = last.checked_add_days(Days::new(1))?;
        Some(Self {
            from: first.and_time(NaiveTime::MIN).and_utc(),
            until: until_day.and_time(NaiveTime::MIN).and_utc(),
        })
    }
}

/// Fully resolved filter set for an event listing query.
#[derive(Debug, Clone)]
pub struct EventFilters {
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub window: Option<DateWindow>,
    /// A validated status token (one of [`EVENT_STATUSES`]).
    pub status: Option<String>,
    pub availability: Option<Availability>,
    pub sort: SortKey,
    /// 1-based page number, at least 1.
    pub page: i64,
}

impl Default for EventFilters {
    /// No filters, default sort, first page.
    fn default() -> Self {
        Self {
            keyword: None,
            category: None,
            location: None,
            window: None,
            status: None,
            availability: None,
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl EventFilters {
    /// Row offset for the current page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * EVENTS_PER_PAGE
    }
}

impl EventQuery {
    /// Resolve raw parameters into typed filters against the given "now".
    pub fn resolve(&self, now: Timestamp) -> EventFilters {
        EventFilters {
            keyword: non_empty(self.search.as_deref()),
            category: non_empty(self.category.as_deref()),
            location: non_empty(self.location.as_deref()),
            window: self.window(now),
            status: self
                .status
                .as_deref()
                .filter(|s| is_valid_status(s))
                .map(String::from),
            availability: self.availability.as_deref().and_then(Availability::parse),
            sort: SortKey::parse(self.sort.as_deref()),
            page: self.page.unwrap_or(1).max(1),
        }
    }

    /// Resolve the date constraint, if any.
    ///
    /// An exact `date` takes precedence over a named range when both are
    /// supplied. A `custom` range applies only when both bounds parse and
    /// start <= end.
    fn window(&self, now: Timestamp) -> Option<DateWindow> {
        if let Some(day) = self.date.as_deref().and_then(parse_day) {
            return DateWindow::spanning(day, day);
        }

        let today = now.date_naive();
        match self.date_range.as_deref() {
            Some("today") => DateWindow::spanning(today, today),
            Some("week") => DateWindow::spanning(today, today.checked_add_days(Days::new(7))?),
            Some("month") => {
                let first = today.with_day(1)?;
                DateWindow::spanning(first, first_of_next_month(first)?)
            }
            Some("custom") => {
                let start = self.start_date.as_deref().and_then(parse_day)?;
                let end = self.end_date.as_deref().and_then(parse_day)?;
                if start <= end {
                    DateWindow::spanning(start, end)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

/// Trim and drop empty strings.
fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Parse a `YYYY-MM-DD` day. Anything else is treated as absent.
fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn first_of_next_month(first: NaiveDate) -> Option<NaiveDate> {
    if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    /// Mid-month fixed instant: 2025-06-15 10:30 UTC.
    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn empty_query_resolves_to_no_filters() {
        let filters = EventQuery::default().resolve(now());
        assert!(filters.keyword.is_none());
        assert!(filters.category.is_none());
        assert!(filters.window.is_none());
        assert!(filters.status.is_none());
        assert!(filters.availability.is_none());
        assert_eq!(filters.sort, SortKey::Date);
        assert_eq!(filters.page, 1);
    }

    #[test]
    fn blank_and_whitespace_strings_are_dropped() {
        let query = EventQuery {
            search: Some("   ".into()),
            category: Some(String::new()),
            ..Default::default()
        };
        let filters = query.resolve(now());
        assert!(filters.keyword.is_none());
        assert!(filters.category.is_none());
    }

    #[test]
    fn today_window_covers_the_current_day() {
        let query = EventQuery {
            date_range: Some("today".into()),
            ..Default::default()
        };
        let window = query.resolve(now()).window.unwrap();
        assert_eq!(window.from, day(2025, 6, 15));
        assert_eq!(window.until, day(2025, 6, 16));
    }

    #[test]
    fn week_window_is_seven_days_inclusive() {
        let query = EventQuery {
            date_range: Some("week".into()),
            ..Default::default()
        };
        let window = query.resolve(now()).window.unwrap();
        assert_eq!(window.from, day(2025, 6, 15));
        // Covers the 15th through the 22nd inclusive.
        assert_eq!(window.until, day(2025, 6, 23));
    }

    #[test]
    fn month_window_runs_through_first_of_next_month() {
        let query = EventQuery {
            date_range: Some("month".into()),
            ..Default::default()
        };
        let window = query.resolve(now()).window.unwrap();
        assert_eq!(window.from, day(2025, 6, 1));
        assert_eq!(window.until, day(2025, 7, 2));
    }

    #[test]
    fn month_window_wraps_december() {
        let december = Utc.with_ymd_and_hms(2025, 12, 20, 8, 0, 0).unwrap();
        let query = EventQuery {
            date_range: Some("month".into()),
            ..Default::default()
        };
        let window = query.resolve(december).window.unwrap();
        assert_eq!(window.from, day(2025, 12, 1));
        assert_eq!(window.until, day(2026, 1, 2));
    }

    #[test]
    fn custom_range_applies_when_ordered() {
        let query = EventQuery {
            date_range: Some("custom".into()),
            start_date: Some("2025-07-01".into()),
            end_date: Some("2025-07-10".into()),
            ..Default::default()
        };
        let window = query.resolve(now()).window.unwrap();
        assert_eq!(window.from, day(2025, 7, 1));
        assert_eq!(window.until, day(2025, 7, 11));
    }

    #[test]
    fn inverted_custom_range_is_silently_ignored() {
        let query = EventQuery {
            date_range: Some("custom".into()),
            start_date: Some("2025-07-10".into()),
            end_date: Some("2025-07-01".into()),
            ..Default::default()
        };
        assert!(query.resolve(now()).window.is_none());
    }

    #[test]
    fn unparseable_dates_are_silently_ignored() {
        let query = EventQuery {
            date: Some("next tuesday".into()),
            ..Default::default()
        };
        assert!(query.resolve(now()).window.is_none());

        let query = EventQuery {
            date_range: Some("custom".into()),
            start_date: Some("07/01/2025".into()),
            end_date: Some("2025-07-10".into()),
            ..Default::default()
        };
        assert!(query.resolve(now()).window.is_none());
    }

    #[test]
    fn exact_date_takes_precedence_over_range_token() {
        let query = EventQuery {
            date: Some("2025-08-01".into()),
            date_range: Some("month".into()),
            ..Default::default()
        };
        let window = query.resolve(now()).window.unwrap();
        assert_eq!(window.from, day(2025, 8, 1));
        assert_eq!(window.until, day(2025, 8, 2));
    }

    #[test]
    fn unknown_tokens_fall_back_to_defaults() {
        let query = EventQuery {
            date_range: Some("fortnight".into()),
            status: Some("cancelled".into()),
            availability: Some("half-empty".into()),
            sort: Some("hotness".into()),
            ..Default::default()
        };
        let filters = query.resolve(now());
        assert!(filters.window.is_none());
        assert!(filters.status.is_none());
        assert!(filters.availability.is_none());
        assert_eq!(filters.sort, SortKey::Date);
    }

    #[test]
    fn recognized_tokens_parse() {
        let query = EventQuery {
            status: Some("upcoming".into()),
            availability: Some("full".into()),
            sort: Some("participants".into()),
            ..Default::default()
        };
        let filters = query.resolve(now());
        assert_eq!(filters.status.as_deref(), Some("upcoming"));
        assert_eq!(filters.availability, Some(Availability::Full));
        assert_eq!(filters.sort, SortKey::Participants);
    }

    #[test]
    fn page_is_clamped_to_at_least_one() {
        let query = EventQuery {
            page: Some(-3),
            ..Default::default()
        };
        let filters = query.resolve(now());
        assert_eq!(filters.page, 1);
        assert_eq!(filters.offset(), 0);

        let query = EventQuery {
            page: Some(3),
            ..Default::default()
        };
        assert_eq!(query.resolve(now()).offset(), 2 * EVENTS_PER_PAGE);
    }
}
