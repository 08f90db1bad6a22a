use serde::{Deserialize, Serialize};

/// Public leaderboard row. `username` is always masked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub wagered: u64,
    #[serde(rename = "weightedWager")]
    pub weighted_wager: u64,
}
