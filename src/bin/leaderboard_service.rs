//! Leaderboard Service
//!
//! Affiliate API → SnapshotCache (refreshed every few minutes) → HTTP
//!
//! - GET /leaderboard/top14: cached current period
//! - GET /leaderboard/prev: previous period, fetched live

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use eyre::{Result, WrapErr};
use log::{info, warn};

use leaderboard::configure::{load_config_from, DEFAULT_CONFIG_PATH};
use leaderboard::fetcher::AffiliateClient;
use leaderboard::gateway::{create_app, AppState};
use leaderboard::keepalive::spawn_self_ping;
use leaderboard::logger;
use leaderboard::service::LeaderboardService;
use leaderboard::snapshot_cache::SnapshotCache;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,
    /// Overrides the configured port; hosting platforms set `PORT`.
    #[clap(long, env = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let args = Args::parse();

    let mut config = load_config_from(&args.config).wrap_err("failed to load config")?;
    if let Some(port) = args.port {
        config.port = port;
    }
    config.validate()?;

    logger::setup_logger(&config).map_err(|e| eyre::eyre!("failed to set up logger: {e}"))?;

    if config.api_key.is_empty() {
        warn!("api_key is empty, upstream requests will likely be rejected");
    }

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout())
        .build()?;
    let source = Arc::new(AffiliateClient::with_client(
        http.clone(),
        &config.upstream_url,
        &config.api_key,
    ));

    let service = LeaderboardService::new(Arc::new(SnapshotCache::new()), source);
    let refresh_task = service.start_refresh(config.refresh_interval());

    let ping_task = config
        .self_ping_url
        .clone()
        .map(|url| spawn_self_ping(http, url, config.self_ping_interval()));

    let app = create_app(Arc::new(AppState { service }));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("failed to bind {addr}"))?;
    info!("leaderboard service listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    info!("shutting down");
    refresh_task.abort();
    if let Some(task) = ping_task {
        task.abort();
    }

    Ok(())
}
