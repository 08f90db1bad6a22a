use super::*;

#[test]
fn test_affiliates_response_parsing() {
    let body = r#"{
        "affiliates": [
            {"username": "alice_w", "wagered_amount": "1520.75", "id": 7},
            {"username": "bob", "wagered_amount": 99}
        ],
        "cached_at": "2024-05-20T10:00:00Z"
    }"#;
    let resp: AffiliatesResponse = serde_json::from_str(body).unwrap();
    let affiliates = resp.affiliates.unwrap();
    assert_eq!(affiliates.len(), 2);
    assert_eq!(affiliates[0].username, "alice_w");
    assert_eq!(affiliates[0].wagered_amount, "1520.75");
    assert_eq!(affiliates[1].wagered_amount, "99");
}

#[test]
fn test_missing_affiliates_is_none() {
    let resp: AffiliatesResponse = serde_json::from_str(r#"{"error": "bad key"}"#).unwrap();
    assert!(resp.affiliates.is_none());

    let resp: AffiliatesResponse = serde_json::from_str(r#"{"affiliates": null}"#).unwrap();
    assert!(resp.affiliates.is_none());
}

#[test]
fn test_null_or_missing_amount_is_empty() {
    let body = r#"{"affiliates": [{"username": "carol", "wagered_amount": null}, {"username": "dave"}]}"#;
    let resp: AffiliatesResponse = serde_json::from_str(body).unwrap();
    let affiliates = resp.affiliates.unwrap();
    assert_eq!(affiliates[0].wagered_amount, "");
    assert_eq!(affiliates[1].wagered_amount, "");
}

#[test]
fn test_entry_serializes_camel_case_wager() {
    let entry = LeaderboardEntry {
        username: "al***_w".to_string(),
        wagered: 1521,
        weighted_wager: 1521,
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"username": "al***_w", "wagered": 1521, "weightedWager": 1521})
    );
}

#[test]
fn test_error_body() {
    let json = serde_json::to_string(&ErrorBody::new(PREVIOUS_LEADERBOARD_ERROR)).unwrap();
    assert_eq!(json, r#"{"error":"Failed to fetch previous leaderboard data."}"#);
}
