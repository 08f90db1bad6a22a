use serde::Deserialize;

/// One referred user's aggregated wagering, as returned by the affiliate API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AffiliateRecord {
    pub username: String,
    /// Decimal amount, kept unparsed.
    #[serde(default, with = "super::serde_utils")]
    pub wagered_amount: String,
}

/// Top-level affiliate API reply. Only `affiliates` is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct AffiliatesResponse {
    #[serde(default)]
    pub affiliates: Option<Vec<AffiliateRecord>>,
}
