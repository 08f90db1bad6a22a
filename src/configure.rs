use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::LeaderboardError;
use crate::fetcher::DEFAULT_AFFILIATES_URL;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub api_key: String,
    pub upstream_url: String,
    pub refresh_interval_secs: u64,
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub self_ping_url: Option<String>,
    pub self_ping_interval_secs: u64,
    pub log_level: String,
    pub log_to_file: bool,
    pub log_file: String,
}

impl AppConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn self_ping_interval(&self) -> Duration {
        Duration::from_secs(self.self_ping_interval_secs)
    }

    pub fn validate(&self) -> Result<(), LeaderboardError> {
        if self.refresh_interval_secs == 0 {
            return Err(LeaderboardError::Config("refresh_interval_secs must be > 0".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(LeaderboardError::Config("request_timeout_secs must be > 0".into()));
        }
        if self.self_ping_url.is_some() && self.self_ping_interval_secs == 0 {
            return Err(LeaderboardError::Config("self_ping_interval_secs must be > 0".into()));
        }
        if self.upstream_url.trim().is_empty() {
            return Err(LeaderboardError::Config("upstream_url is empty".into()));
        }
        Ok(())
    }
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(DEFAULT_CONFIG_PATH)
}

/// Defaults, then the optional YAML file at `path`, then `APP_*` env vars.
pub fn load_config_from(path: &str) -> Result<AppConfig, ConfigError> {
    let s = Config::builder()
        // Set defaults
        .set_default("port", 3000)?
        .set_default("api_key", "")?
        .set_default("upstream_url", DEFAULT_AFFILIATES_URL)?
        .set_default("refresh_interval_secs", 300)?
        .set_default("request_timeout_secs", 15)?
        .set_default("self_ping_interval_secs", 270)?
        .set_default("log_level", "info")?
        .set_default("log_to_file", false)?
        .set_default("log_file", "log/leaderboard.log")?
        // Add configuration from a file
        .add_source(File::with_name(path).required(false))
        // Add configuration from environment variables
        .add_source(Environment::with_prefix("APP").try_parsing(true))
        .build()?;

    s.try_deserialize()
}
