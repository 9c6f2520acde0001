//! Repository for the append-only `search_history` and `page_visits` logs.

use ecoconnect_core::types::DbId;
use sqlx::PgPool;

use crate::models::history::SearchRecord;

/// Provides append and readback over the history logs.
pub struct HistoryRepo;

impl HistoryRepo {
    /// Append a search-history row.
    pub async fn record_search(
        pool: &PgPool,
        user_id: Option<DbId>,
        query: &str,
        results_count: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO search_history (user_id, query, results_count) VALUES ($1, $2, $3)",
        )
        .bind(user_id)
        .bind(query)
        .bind(results_count as i32)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// A user's most recent searches, newest first.
    pub async fn recent_searches(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<SearchRecord>, sqlx::Error> {
        sqlx::query_as::<_, SearchRecord>(
            "SELECT id, user_id, query, results_count, searched_at \
             FROM search_history \
             WHERE user_id = $1 \
             ORDER BY searched_at DESC \
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Append a page-visit row.
    pub async fn record_visit(
        pool: &PgPool,
        user_id: DbId,
        page: &str,
        ip_address: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO page_visits (user_id, page, ip_address) VALUES ($1, $2, $3)")
            .bind(user_id)
            .bind(page)
            .bind(ip_address)
            .execute(pool)
            .await?;
        Ok(())
    }
}
