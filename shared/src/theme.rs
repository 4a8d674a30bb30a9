//! Theme validation.
//!
//! Themes are the only user text that ends up inside a model prompt, so they
//! are held to a conservative character set before anything downstream sees
//! them.

use regex::Regex;
use std::sync::LazyLock;

/// Fixed message returned when a theme fails validation.
pub const INVALID_THEME_MESSAGE: &str =
    "Theme may only contain letters, numbers, spaces, commas, periods and hyphens";

static THEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s,.\-]+$").expect("valid theme regex"));

/// Check that a theme uses only the allowed character set.
///
/// The whole string must match; a single stray character rejects the theme.
pub fn is_valid(theme: &str) -> bool {
    THEME_RE.is_match(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_allowed_characters() {
        assert!(is_valid("space,travel.fun-times"));
        assert!(is_valid("medieval cooking"));
        assert!(is_valid("90s nostalgia"));
    }

    #[test]
    fn test_rejects_special_characters() {
        assert!(!is_valid("sports!!"));
        assert!(!is_valid("<script>"));
        assert!(!is_valid("a;b"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(!is_valid(""));
    }
}
