//! Search-history and page-visit models.
//!
//! Both tables are append-only logs; rows are written fire-and-forget and
//! read back only for dashboard counts and tests.

use ecoconnect_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `search_history` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SearchRecord {
    pub id: DbId,
    /// Absent for anonymous searches.
    pub user_id: Option<DbId>,
    pub query: String,
    pub results_count: i32,
    pub searched_at: Timestamp,
}

/// A row from the `page_visits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PageVisit {
    pub id: DbId,
    pub user_id: DbId,
    pub page: String,
    pub ip_address: Option<String>,
    pub visited_at: Timestamp,
}
