/// Marker appended to subtitle text that exceeds its character cap
const ELLIPSIS: &str = "...";

/// Truncate a string to at most `max` characters
///
/// Counts code points, not bytes, so multi-byte text is never split
/// mid-character.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Truncate a string to at most `max` characters, marking the cut with `...`
///
/// The ellipsis counts toward the cap: the output is exactly `max`
/// characters when truncation happens.
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept = truncate_chars(s, max.saturating_sub(ELLIPSIS.len()));
    format!("{kept}{ELLIPSIS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_with_ellipsis("abc", 10), "abc");
    }

    #[test]
    fn exact_length_is_not_truncated() {
        let s = "x".repeat(64);
        assert_eq!(truncate_with_ellipsis(&s, 64), s);
    }

    #[test]
    fn truncates_by_character_count() {
        let s = "a".repeat(4051);
        assert_eq!(truncate_chars(&s, 4000).chars().count(), 4000);
    }

    #[test]
    fn ellipsis_counts_toward_the_cap() {
        let s = "b".repeat(80);
        let out = truncate_with_ellipsis(&s, 64);
        assert_eq!(out.chars().count(), 64);
        assert!(out.ends_with("..."));
        assert_eq!(&out[..61], "b".repeat(61));
    }

    #[test]
    fn counts_code_points_not_bytes() {
        // Each 'é' is two bytes but one character.
        let s = "é".repeat(70);
        let out = truncate_with_ellipsis(&s, 64);
        assert_eq!(out.chars().count(), 64);
        assert_eq!(truncate_chars(&s, 64).chars().count(), 64);
    }
}
