//! Escaping of markup-significant characters.
//!
//! Stored text is rendered directly by the frontend, so `&`, `<`, `>` and
//! quotes become HTML entities before a row is written. An ampersand that
//! already introduces an entity is left alone, which keeps the transform
//! idempotent: re-saving already-escaped text does not double-escape it.
//! SQL injection is not this module's concern; all writes are parameterized.

use regex::Regex;
use std::sync::LazyLock;

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(amp|lt|gt|quot|#[0-9]+|#x[0-9a-fA-F]+);").expect("valid entity regex")
});

/// Escape markup-significant characters to HTML entities.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '&' => {
                if ENTITY_RE.is_match(rest) {
                    out.push('&');
                } else {
                    out.push_str("&amp;");
                }
            }
            c => out.push(c),
        }
        rest = &rest[ch.len_utf8()..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup_characters() {
        assert_eq!(escape("salt & pepper"), "salt &amp; pepper");
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn test_leaves_plain_text_alone() {
        assert_eq!(escape("space,travel.fun-times"), "space,travel.fun-times");
    }

    #[test]
    fn test_idempotent_on_escaped_input() {
        let once = escape("salt & pepper <now>");
        assert_eq!(escape(&once), once);
        assert_eq!(escape("&amp; &lt; &#39;"), "&amp; &lt; &#39;");
    }

    #[test]
    fn test_bare_ampersand_before_text_is_escaped() {
        assert_eq!(escape("&ampersand"), "&amp;ampersand");
        assert_eq!(escape("a&"), "a&amp;");
    }
}
