// contenttype-rs - HTTP Content-Type parsing and formatting
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Character classes and string transforms shared by the parser and the
//! formatter.
//!
//! Centralizing these keeps parse-time acceptance and format-time emission
//! in lockstep: a value accepted while parsing is always re-formattable,
//! and a value the formatter rejects can never have been produced by a
//! successful parse.
//!
//! Classes follow RFC 7230 §3.2.6 (`token`, `quoted-string`, `quoted-pair`,
//! obs-text).

/// Returns true for members of the RFC 7230 `tchar` set.
pub fn is_tchar(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|'
                | '~'
        )
}

/// Returns true when `s` is a non-empty run of `tchar`s.
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_tchar)
}

/// Returns true when `s` is exactly `token "/" token`, with no surrounding
/// whitespace.
pub fn is_type_subtype(s: &str) -> bool {
    match s.split_once('/') {
        Some((ty, subtype)) => is_token(ty) && is_token(subtype),
        None => false,
    }
}

/// Returns true for characters that may appear in a quoted-string body
/// (before escaping): HTAB, SP through `~`, and the Latin-1 obs-text range.
///
/// `"` and `\` are members: they are legal *content*, carried via the
/// quoted-pair escape on the wire.
pub fn is_quotable_char(c: char) -> bool {
    c == '\t' || matches!(c as u32, 0x20..=0x7e | 0x80..=0xff)
}

/// Returns true when every character of `s` can be carried inside a
/// quoted-string. The empty string is quotable (it renders as `""`).
pub fn is_quotable(s: &str) -> bool {
    s.chars().all(is_quotable_char)
}

/// `qdtext`: quoted-string characters that stand for themselves, i.e. the
/// quotable class minus the two characters the escape mechanism reserves.
pub fn is_qdtext_char(c: char) -> bool {
    is_quotable_char(c) && c != '"' && c != '\\'
}

/// Characters a `\` may escape inside a quoted-string: HTAB plus the whole
/// 0x20–0xFF range. Slightly wider than the quotable class (DEL is
/// escapable on the wire even though the formatter never emits it).
pub fn is_quoted_pair_char(c: char) -> bool {
    c == '\t' || matches!(c as u32, 0x20..=0xff)
}

/// Replaces every `\X` quoted-pair in a quoted-string *body* (delimiters
/// already stripped) with the literal `X`.
///
/// The caller guarantees the body came from a successful quoted-string
/// match, so every `\` is followed by a quoted-pair character.
pub fn unescape_quoted(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Inserts a backslash before every literal `\` and `"`, producing a valid
/// quoted-string body for `value`.
pub fn escape_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_accepts_tchars() {
        assert!(is_token("svg+xml"));
        assert!(is_token("x-custom.v1"));
        assert!(is_token("!#$%&'*+-.^_`|~09AZaz"));
    }

    #[test]
    fn token_rejects_separators() {
        assert!(!is_token(""));
        assert!(!is_token("utf 8"));
        assert!(!is_token("a/b"));
        assert!(!is_token("a;b"));
        assert!(!is_token("a\"b"));
        assert!(!is_token("a\\b"));
        assert!(!is_token("p£ain"));
    }

    #[test]
    fn type_subtype_shape() {
        assert!(is_type_subtype("text/html"));
        assert!(is_type_subtype("image/svg+xml"));
        assert!(!is_type_subtype("text"));
        assert!(!is_type_subtype("/"));
        assert!(!is_type_subtype("text/"));
        assert!(!is_type_subtype("/html"));
        assert!(!is_type_subtype("text / plain"));
        assert!(!is_type_subtype(" text/html"));
        assert!(!is_type_subtype("a/b/c"));
    }

    #[test]
    fn quotable_range() {
        assert!(is_quotable(""));
        assert!(is_quotable("bar or \"baz\""));
        assert!(is_quotable("\tcafé"));
        assert!(!is_quotable("nul\u{0}"));
        assert!(!is_quotable("line\nbreak"));
        assert!(!is_quotable("€"));
    }

    #[test]
    fn unescape_strips_backslashes() {
        assert_eq!(unescape_quoted(r#"UT\F-\\\"8\""#), "UTF-\\\"8\"");
        assert_eq!(unescape_quoted("plain"), "plain");
        assert_eq!(unescape_quoted(""), "");
    }

    #[test]
    fn escape_round_trips() {
        let original = "back\\slash and \"quote\"";
        assert_eq!(unescape_quoted(&escape_quoted(original)), original);
        assert_eq!(escape_quoted("plain"), "plain");
    }
}
