//! Input text cleanup before any provider call

use regex::Regex;
use std::sync::OnceLock;

/// Hard cap on cleaned input length, to stay clear of provider limits
const MAX_INPUT_LEN: usize = 4000;

/// Marker appended when text is truncated
pub(crate) const ELLIPSIS: &str = "...";

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern"))
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern"))
}

/// Clean raw article text before sending it to an AI provider
///
/// Strips markup tags, collapses whitespace runs into single spaces,
/// trims, and caps the result at 4000 characters with an ellipsis marker.
/// Never fails; empty input yields empty output.
pub fn sanitize(raw: &str) -> String {
    let stripped = tag_re().replace_all(raw, "");
    let collapsed = whitespace_re().replace_all(&stripped, " ");
    let trimmed = collapsed.trim();

    if trimmed.len() > MAX_INPUT_LEN {
        format!("{}{}", truncate_at_boundary(trimmed, MAX_INPUT_LEN), ELLIPSIS)
    } else {
        trimmed.to_string()
    }
}

/// Cut a string at the last char boundary at or below `max` bytes
pub(crate) fn truncate_at_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }

    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }

    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markup() {
        let out = sanitize("<p>Hello <strong>world</strong></p>");
        assert_eq!(out, "Hello world");
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
    }

    #[test]
    fn test_tags_removed_without_replacement() {
        // Adjacent tags leave no separator behind
        assert_eq!(sanitize("foo</p><p>bar"), "foobar");
        assert_eq!(sanitize("a<br>b"), "ab");
    }

    #[test]
    fn test_collapses_whitespace() {
        let out = sanitize("Hello   world\n\nsecond\t\tline");
        assert_eq!(out, "Hello world second line");
        assert!(!out.contains("  "));
    }

    #[test]
    fn test_trims() {
        assert_eq!(sanitize("  padded  "), "padded");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   \n\t "), "");
        assert_eq!(sanitize("<p></p>"), "");
    }

    #[test]
    fn test_long_input_capped() {
        let raw = "a".repeat(5000);
        let out = sanitize(&raw);
        assert_eq!(out.len(), 4003);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_cap_respects_char_boundary() {
        // 2-byte chars; 4000 is not a boundary after 3999 bytes of ASCII
        let raw = format!("{}{}", "a".repeat(3999), "é".repeat(10));
        let out = sanitize(&raw);
        assert!(out.len() <= 4003);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_exactly_at_cap_untouched() {
        let raw = "b".repeat(4000);
        let out = sanitize(&raw);
        assert_eq!(out.len(), 4000);
        assert!(!out.ends_with("..."));
    }
}
