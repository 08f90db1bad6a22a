use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::error::{LeaderboardError, Result};
use crate::models::{AffiliateRecord, AffiliatesResponse, LeaderboardEntry};
use crate::period::PeriodWindow;
use crate::ranking::rank_affiliates;

pub const DEFAULT_AFFILIATES_URL: &str = "https://services.rainbet.com/v1/external/affiliates";

/// Anything that can produce a ranked leaderboard for a period window.
pub trait LeaderboardSource: Send + Sync {
    fn fetch(
        &self,
        window: PeriodWindow,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<LeaderboardEntry>>> + Send + '_>>;
}

/// HTTP client for the affiliate listing endpoint.
pub struct AffiliateClient {
    client: Client,
    url: String,
    api_key: String,
}

impl AffiliateClient {
    pub fn new(url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, url, api_key))
    }

    pub fn with_client(client: Client, url: &str, api_key: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Fetch the raw affiliate list for `window`.
    ///
    /// Transport errors are stripped of their URL, which carries the API key.
    pub async fn fetch_affiliates(&self, window: &PeriodWindow) -> Result<Vec<AffiliateRecord>> {
        debug!("fetching affiliates for {window}");

        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("start_at", window.start_param().as_str()),
                ("end_at", window.end_param().as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| LeaderboardError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LeaderboardError::UpstreamStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LeaderboardError::Transport(e.without_url()))?;
        let parsed: AffiliatesResponse = serde_json::from_slice(&body)?;

        parsed.affiliates.ok_or(LeaderboardError::NoData)
    }

    pub async fn fetch_leaderboard(&self, window: &PeriodWindow) -> Result<Vec<LeaderboardEntry>> {
        let records = self.fetch_affiliates(window).await?;
        debug!("received {} affiliate records for {window}", records.len());
        Ok(rank_affiliates(records))
    }
}

impl LeaderboardSource for AffiliateClient {
    fn fetch(
        &self,
        window: PeriodWindow,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<LeaderboardEntry>>> + Send + '_>> {
        Box::pin(async move { self.fetch_leaderboard(&window).await })
    }
}
