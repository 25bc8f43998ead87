use crate::utils::error::Result;
use crate::utils::validation::{
    validate_no_leading_or_trailing_whitespace, validate_not_empty, validate_not_whitespace_only,
};
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Line ending every normalized text uses.
pub const CANONICAL_NEWLINE: &str = "\n";

/// Rewrites `\r\n` and bare `\r` to [`CANONICAL_NEWLINE`].
pub fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace("\r\n", "\n").replace('\r', CANONICAL_NEWLINE))
}

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

fn non_slug_char() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9-]").expect("static regex"))
}

/// Lowercased, hyphen-separated form of a display name, e.g. "Intro to Rust!"
/// becomes "intro-to-rust".
pub fn to_url_slug(s: &str) -> Result<String> {
    validate_not_empty("s", s)?;
    validate_not_whitespace_only("s", s)?;
    validate_no_leading_or_trailing_whitespace("s", s)?;

    let lowered = s.to_lowercase();
    let hyphenated = whitespace_run().replace_all(&lowered, "-");
    Ok(non_slug_char().replace_all(&hyphenated, "").into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("1\n2\r3\r\n4"), "1\n2\n3\n4");
        assert_eq!(normalize_newlines("\r\n\r\n"), "\n\n");
        assert_eq!(normalize_newlines("\n\r"), "\n\n");
        assert!(matches!(normalize_newlines("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_absent_text_stays_absent() {
        let absent: Option<&str> = None;
        assert_eq!(absent.map(normalize_newlines), None);
    }

    #[test]
    fn test_to_url_slug() {
        assert_eq!(to_url_slug("Intro to Rust!").unwrap(), "intro-to-rust");
        assert_eq!(to_url_slug("C#  Basics").unwrap(), "c-basics");
        assert_eq!(to_url_slug("already-slugged").unwrap(), "already-slugged");
        assert!(to_url_slug("").is_err());
        assert!(to_url_slug("   ").is_err());
        assert!(to_url_slug(" padded").is_err());
    }
}
