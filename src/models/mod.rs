pub use affiliate::*;
pub use api_response::*;
pub use leaderboard_entry::*;

pub mod affiliate;
pub mod api_response;
pub mod leaderboard_entry;
mod serde_utils;

#[cfg(test)]
mod tests;
