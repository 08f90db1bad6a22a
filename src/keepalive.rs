//! Periodic self-ping that keeps idle-sleeping hosts awake.

use std::time::Duration;

use log::{info, warn};
use reqwest::{Client, StatusCode};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Ping `url` every `interval`, starting one interval from now.
pub fn spawn_self_ping(client: Client, url: String, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match ping(&client, &url).await {
                Ok(status) => info!("self-pinged {url} ({status})"),
                Err(e) => warn!("self-ping {url} failed: {e}"),
            }
        }
    })
}

async fn ping(client: &Client, url: &str) -> Result<StatusCode, reqwest::Error> {
    let response = client.get(url).send().await?;
    Ok(response.status())
}
