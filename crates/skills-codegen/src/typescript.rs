//! TypeScript literal utilities.
//!
//! The generated document is pasted into the front end as TypeScript
//! source, so every string value goes through [`escape_single_quoted`] and
//! every declared name must pass [`is_valid_identifier`].
//!
//! # Examples
//!
//! ```
//! use skills_codegen::typescript::{escape_single_quoted, is_valid_identifier};
//!
//! assert_eq!(escape_single_quoted("Rock 'n' Roll"), r"Rock \'n\' Roll");
//! assert!(is_valid_identifier("SKILLS"));
//! assert!(!is_valid_identifier("my-skills"));
//! ```

use regex::Regex;
use std::sync::LazyLock;

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid regex"));

/// Words that cannot name a `const` or an `interface`.
const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
    "implements", "import", "in", "instanceof", "interface", "let", "new", "null", "package",
    "private", "protected", "public", "return", "static", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Escapes a value for use inside a single-quoted TypeScript string.
///
/// Handles backslash, single quote and the line terminators that would end
/// the literal.
///
/// # Examples
///
/// ```
/// use skills_codegen::typescript::escape_single_quoted;
///
/// assert_eq!(escape_single_quoted("C#"), "C#");
/// assert_eq!(escape_single_quoted("a\\b"), "a\\\\b");
/// assert_eq!(escape_single_quoted("line\nbreak"), "line\\nbreak");
/// ```
#[must_use]
pub fn escape_single_quoted(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(ch),
        }
    }

    escaped
}

/// Returns `true` if `name` can be declared as a TypeScript `const` or
/// `interface`.
///
/// Only ASCII identifiers are accepted.
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER_RE.is_match(name) && !RESERVED_WORDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_passthrough() {
        assert_eq!(escape_single_quoted("Next JS"), "Next JS");
        assert_eq!(escape_single_quoted("C++"), "C++");
        assert_eq!(escape_single_quoted("#ffffff"), "#ffffff");
        assert_eq!(
            escape_single_quoted("https://cdn.simpleicons.org/c/ffffff"),
            "https://cdn.simpleicons.org/c/ffffff"
        );
        assert_eq!(escape_single_quoted(""), "");
    }

    #[test]
    fn test_escape_does_not_touch_html() {
        assert_eq!(escape_single_quoted("<b>&\"x\"</b>"), "<b>&\"x\"</b>");
    }

    #[test]
    fn test_escape_quotes_and_backslashes() {
        assert_eq!(escape_single_quoted("O'Reilly"), r"O\'Reilly");
        assert_eq!(escape_single_quoted(r"\'"), r"\\\'");
    }

    #[test]
    fn test_escape_line_terminators() {
        assert_eq!(escape_single_quoted("a\r\nb"), r"a\r\nb");
        assert_eq!(
            escape_single_quoted("a\u{2028}b\u{2029}"),
            r"a\u2028b\u2029"
        );
    }

    #[test]
    fn test_escape_keeps_unicode() {
        assert_eq!(escape_single_quoted("日本語 🦀"), "日本語 🦀");
    }

    #[test]
    fn test_valid_identifiers() {
        for name in ["SKILLS", "Skill", "_skills", "$skills", "skills2", "_"] {
            assert!(is_valid_identifier(name), "{name}");
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        for name in ["", "2skills", "my-skills", "my skills", "skills!", "naïve"] {
            assert!(!is_valid_identifier(name), "{name}");
        }
        for name in ["const", "interface", "class"] {
            assert!(!is_valid_identifier(name), "{name}");
        }
    }
}
