//! Error types for the leaderboard engine

#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    /// Connection, TLS or timeout failure talking to the affiliate API.
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned HTTP {0}")]
    UpstreamStatus(u16),
    #[error("upstream body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    /// Reply decoded but carried no `affiliates` collection.
    #[error("no data")]
    NoData,
    #[error("period window for {0} is outside the calendar range")]
    PeriodOutOfRange(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T, E = LeaderboardError> = std::result::Result<T, E>;
