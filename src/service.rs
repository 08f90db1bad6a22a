use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::fetcher::LeaderboardSource;
use crate::models::LeaderboardEntry;
use crate::period::{window_for, PeriodOffset};
use crate::snapshot_cache::{Snapshot, SnapshotCache};

/// Entry point used by the HTTP layer.
///
/// The current period is served from the cache; the previous period is
/// fetched live on every call.
#[derive(Clone)]
pub struct LeaderboardService {
    cache: Arc<SnapshotCache>,
    source: Arc<dyn LeaderboardSource>,
}

impl LeaderboardService {
    pub fn new(cache: Arc<SnapshotCache>, source: Arc<dyn LeaderboardSource>) -> Self {
        Self { cache, source }
    }

    pub fn cache(&self) -> &Arc<SnapshotCache> {
        &self.cache
    }

    /// Cached current-period snapshot. Never fails; may be stale or empty.
    pub fn get_current(&self) -> Arc<Snapshot> {
        self.cache.read_current()
    }

    pub async fn get_previous(&self) -> Result<Vec<LeaderboardEntry>> {
        self.get_previous_at(Utc::now()).await
    }

    /// Previous-period leaderboard as of `now`, fetched from upstream.
    pub async fn get_previous_at(&self, now: DateTime<Utc>) -> Result<Vec<LeaderboardEntry>> {
        let window = window_for(PeriodOffset::Previous, now)?;
        self.source.fetch(window).await
    }

    pub async fn refresh_current_at(&self, now: DateTime<Utc>) -> Result<()> {
        self.cache.refresh_current_at(self.source.as_ref(), now).await
    }

    /// Start the background refresh loop for the current period.
    pub fn start_refresh(&self, interval: Duration) -> JoinHandle<()> {
        self.cache.spawn_refresh_task(Arc::clone(&self.source), interval)
    }
}
