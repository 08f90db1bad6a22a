//! Hot copy of the current-period leaderboard.
//!
//! Readers never block: `read_current` is an atomic `Arc` load. The refresh
//! path builds a complete [`Snapshot`] off to the side and swaps it in with a
//! single store, so a reader sees either the old value or the new one in full.

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use log::{error, info};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::error::Result;
use crate::fetcher::LeaderboardSource;
use crate::models::LeaderboardEntry;
use crate::period::{window_for, PeriodOffset, PeriodWindow};

/// One committed leaderboard result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub entries: Vec<LeaderboardEntry>,
    /// `None` until the first successful refresh.
    pub window: Option<PeriodWindow>,
    pub refreshed_at: Option<DateTime<Utc>>,
}

pub struct SnapshotCache {
    current: ArcSwap<Snapshot>,
    /// Serializes refreshes; readers never touch it.
    refresh_lock: Mutex<()>,
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(Snapshot::default()),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Latest committed snapshot (lock-free).
    #[inline]
    pub fn read_current(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    fn replace(&self, snapshot: Snapshot) {
        self.current.store(Arc::new(snapshot));
    }

    pub async fn refresh_current(&self, source: &dyn LeaderboardSource) -> Result<()> {
        self.refresh_current_at(source, Utc::now()).await
    }

    /// Fetch the current period as of `now` and commit it.
    ///
    /// On error the committed snapshot is left untouched.
    pub async fn refresh_current_at(
        &self,
        source: &dyn LeaderboardSource,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let _guard = self.refresh_lock.lock().await;

        let window = window_for(PeriodOffset::Current, now)?;
        let entries = source.fetch(window).await?;

        info!("leaderboard updated: {} entries for {window}", entries.len());
        self.replace(Snapshot {
            entries,
            window: Some(window),
            refreshed_at: Some(now),
        });
        Ok(())
    }

    /// Spawn the periodic refresh loop. The first refresh runs immediately.
    ///
    /// Each refresh runs in its own task so that neither an error nor a panic
    /// ends the loop.
    pub fn spawn_refresh_task(
        self: &Arc<Self>,
        source: Arc<dyn LeaderboardSource>,
        interval: Duration,
    ) -> JoinHandle<()> {
        let cache = Arc::clone(self);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let cache = Arc::clone(&cache);
                let source = Arc::clone(&source);
                let outcome =
                    tokio::spawn(async move { cache.refresh_current(source.as_ref()).await }).await;

                match outcome {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        error!("failed to refresh leaderboard, keeping previous snapshot: {e}");
                    }
                    Err(e) => {
                        error!("leaderboard refresh task aborted: {e}");
                    }
                }
            }
        })
    }
}
