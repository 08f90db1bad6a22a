use serde::{Deserialize, Serialize};

pub const PREVIOUS_LEADERBOARD_ERROR: &str = "Failed to fetch previous leaderboard data.";

/// Generic error body returned to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}
