/// Marker placed between the kept prefix and suffix of a masked name.
pub const MASK_MARKER: &str = "***";

/// Redact a username for public display.
///
/// Names of four characters or fewer are returned as-is. Longer names keep
/// their first two and last two characters around [`MASK_MARKER`].
/// Lengths count Unicode scalar values, so multi-byte names are never split
/// inside a character.
pub fn mask_username(username: &str) -> String {
    let len = username.chars().count();
    if len <= 4 {
        return username.to_string();
    }

    let prefix: String = username.chars().take(2).collect();
    let suffix: String = username.chars().skip(len - 2).collect();
    format!("{prefix}{MASK_MARKER}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_names_unchanged() {
        assert_eq!(mask_username(""), "");
        assert_eq!(mask_username("a"), "a");
        assert_eq!(mask_username("bob"), "bob");
        assert_eq!(mask_username("abcd"), "abcd");
    }

    #[test]
    fn test_long_names_masked() {
        assert_eq!(mask_username("abcde"), "ab***de");
        assert_eq!(mask_username("slackerdata"), "sl***ta");
    }

    #[test]
    fn test_middle_never_leaks() {
        let name = "whale_player_42";
        let masked = mask_username(name);
        assert_eq!(masked, "wh***42");
        assert!(!masked.contains("ale_player_"));
    }

    #[test]
    fn test_multibyte_names() {
        assert_eq!(mask_username("ÄÖÜßéè"), "ÄÖ***éè");
        assert_eq!(mask_username("日本語"), "日本語");
    }
}
