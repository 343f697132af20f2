//! Shared utility functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to at most `max_width` terminal columns.
///
/// Wide characters (CJK, emoji) count as two columns. When anything is cut,
/// the last column is replaced by an ellipsis so truncation is visible.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_to_width("hello world", 8), "hello w…");
/// assert_eq!(truncate_to_width("hello", 8), "hello");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1; // room for the ellipsis
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_ascii_adds_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    }

    #[test]
    fn test_truncate_respects_wide_chars() {
        // Each character is two columns wide
        let s = "日本語";
        assert_eq!(truncate_to_width(s, 5), "日本…");
        assert_eq!(truncate_to_width(s, 4), "日…");
    }

    #[test]
    fn test_truncate_to_zero() {
        assert_eq!(truncate_to_width("hello", 0), "");
        assert_eq!(truncate_to_width("", 0), "");
    }
}
