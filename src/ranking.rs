//! Turns raw affiliate records into the public top list.

use std::cmp::Ordering;

use log::warn;

use crate::masking::mask_username;
use crate::models::{AffiliateRecord, LeaderboardEntry};

/// Number of rows a leaderboard ever carries.
pub const LEADERBOARD_SIZE: usize = 10;

/// Parse an upstream decimal. Empty, malformed and non-finite values are `None`.
pub fn parse_wager(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Round to a whole display amount. Negative values clamp to zero.
pub fn round_wager(amount: f64) -> u64 {
    // `as` saturates at u64::MAX for huge values
    amount.round().max(0.0) as u64
}

/// Order by amount descending; unparsable amounts sink below every number.
fn by_amount_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Rank, truncate, reorder and mask.
///
/// Records are sorted by parsed `wagered_amount` (stable, so ties keep
/// upstream order) and the first [`LEADERBOARD_SIZE`] are kept. When at least
/// two remain, positions 1 and 2 are swapped for display. Unparsable amounts
/// are shown as 0.
pub fn rank_affiliates(records: Vec<AffiliateRecord>) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<(Option<f64>, AffiliateRecord)> = records
        .into_iter()
        .map(|record| {
            let amount = parse_wager(&record.wagered_amount);
            if amount.is_none() {
                warn!(
                    "unparsable wagered_amount {:?} for {}, ranking last",
                    record.wagered_amount,
                    mask_username(&record.username)
                );
            }
            (amount, record)
        })
        .collect();

    ranked.sort_by(|(a, _), (b, _)| by_amount_desc(*a, *b));
    ranked.truncate(LEADERBOARD_SIZE);

    if ranked.len() >= 2 {
        ranked.swap(0, 1);
    }

    ranked
        .into_iter()
        .map(|(amount, record)| {
            let wagered = amount.map(round_wager).unwrap_or(0);
            LeaderboardEntry {
                username: mask_username(&record.username),
                wagered,
                weighted_wager: wagered,
            }
        })
        .collect()
}
