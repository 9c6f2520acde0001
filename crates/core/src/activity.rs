//! Recent-activity feed assembly for the dashboard.

use serde::Serialize;

use crate::types::Timestamp;

/// How many items each activity source contributes before the merge.
pub const ITEMS_PER_SOURCE: i64 = 3;

/// Maximum entries in the merged feed.
pub const FEED_LIMIT: usize = 5;

/// What the user did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Organized,
    Joined,
    UploadedPhoto,
}

/// One entry in the dashboard activity feed.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub description: String,
    pub date: Timestamp,
}

/// Merge per-source recents into the feed: sort the union newest-first and
/// keep the top [`FEED_LIMIT`].
///
/// Callers pass at most [`ITEMS_PER_SOURCE`] items per source. The cut
/// happens per source before the merge, so a source's 4th-newest item can
/// lose its slot to an older item from another source.
pub fn merge_recent(sources: Vec<Vec<ActivityItem>>) -> Vec<ActivityItem> {
    let mut all: Vec<ActivityItem> = sources.into_iter().flatten().collect();
    all.sort_by(|a, b| b.date.cmp(&a.date));
    all.truncate(FEED_LIMIT);
    all
}
