// contenttype-rs - HTTP Content-Type parsing and formatting
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing of the raw `Content-Type` header value.
//!
//! The media type is split off at the first `;`, trimmed and validated,
//! then the remainder is consumed by repeated applications of the
//! parameter fragment starting exactly where the previous one ended. Any
//! input the scan cannot account for — an unterminated quote, a stray
//! character between parameters, trailing garbage — fails the whole parse;
//! nothing is silently dropped.

use std::collections::BTreeMap;

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    error::{Error, ErrorKind},
    IResult,
};
use smol_str::SmolStr;

use crate::grammar;
use crate::media_type::MediaType;

/// Reasons a raw header value fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The `type/subtype` portion does not match the grammar.
    InvalidMediaType,
    /// The parameter tail is not a contiguous run of well-formed
    /// `; name=value` segments covering the rest of the input.
    InvalidParameterFormat,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMediaType => write!(f, "invalid media type"),
            Self::InvalidParameterFormat => write!(f, "invalid parameter format"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a `Content-Type` header value into a [`MediaType`].
///
/// The media type and parameter names are folded to lowercase; parameter
/// values keep their case. Quoted values are unescaped, so the returned
/// parameters hold the literal content. For a duplicated parameter name
/// the last occurrence wins.
///
/// # Examples
///
/// ```
/// use contenttype::parse;
///
/// let mt = parse("Text/HTML; Charset=\"utf-8\"").unwrap();
/// assert_eq!(mt.essence(), "text/html");
/// assert_eq!(mt.param("charset"), Some("utf-8"));
/// ```
pub fn parse(raw: &str) -> Result<MediaType, ParseError> {
    let (type_part, mut rest) = match raw.find(';') {
        Some(idx) => (&raw[..idx], &raw[idx..]),
        None => (raw, ""),
    };

    let essence = type_part.trim_matches(|c: char| c.is_ascii_whitespace());
    if !grammar::is_type_subtype(essence) {
        return Err(ParseError::InvalidMediaType);
    }

    let mut parameters = BTreeMap::new();
    while !rest.is_empty() {
        let (next, (name, raw_value)) =
            parameter(rest).map_err(|_| ParseError::InvalidParameterFormat)?;
        let value = if raw_value.starts_with('"') {
            SmolStr::new(grammar::unescape_quoted(&raw_value[1..raw_value.len() - 1]))
        } else {
            SmolStr::new(raw_value)
        };
        parameters.insert(SmolStr::new(name.to_ascii_lowercase()), value);
        rest = next;
    }

    Ok(MediaType {
        essence: SmolStr::new(essence.to_ascii_lowercase()),
        parameters,
    })
}

impl std::str::FromStr for MediaType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Optional whitespace between parameter pieces: SP / HTAB.
fn ows(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c == ' ' || c == '\t')(input)
}

fn token(input: &str) -> IResult<&str, &str> {
    take_while1(grammar::is_tchar)(input)
}

/// One `; OWS name OWS = OWS value OWS` segment. The returned value span
/// still carries its quotes when the quoted alternative matched.
fn parameter(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, _) = char(';')(input)?;
    let (input, _) = ows(input)?;
    let (input, name) = token(input)?;
    let (input, _) = ows(input)?;
    let (input, _) = char('=')(input)?;
    let (input, _) = ows(input)?;
    let (input, value) = alt((quoted_string, token))(input)?;
    let (input, _) = ows(input)?;
    Ok((input, (name, value)))
}

/// Matches a complete quoted-string and returns its span, delimiters
/// included. Fails on an unterminated string, a dangling escape, or a
/// character outside the qdtext/quoted-pair classes.
fn quoted_string(input: &str) -> IResult<&str, &str> {
    let mut iter = input.char_indices();
    match iter.next() {
        Some((_, '"')) => {}
        _ => return Err(nom::Err::Error(Error::new(input, ErrorKind::Char))),
    }

    let mut escaped = false;
    for (idx, c) in iter {
        if escaped {
            if !grammar::is_quoted_pair_char(c) {
                return Err(nom::Err::Error(Error::new(input, ErrorKind::Escaped)));
            }
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            return Ok((&input[idx + 1..], &input[..idx + 1]));
        } else if !grammar::is_qdtext_char(c) {
            return Err(nom::Err::Error(Error::new(input, ErrorKind::Char)));
        }
    }

    // Closing quote never arrived.
    Err(nom::Err::Error(Error::new(input, ErrorKind::Eof)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_only() {
        let mt = parse("text/html").unwrap();
        assert_eq!(mt.essence(), "text/html");
        assert!(!mt.has_params());
    }

    #[test]
    fn suffixed_subtype() {
        let mt = parse("image/svg+xml").unwrap();
        assert_eq!(mt.essence(), "image/svg+xml");
    }

    #[test]
    fn leading_whitespace_trimmed() {
        let mt = parse(" text/html").unwrap();
        assert_eq!(mt.essence(), "text/html");
    }

    #[test]
    fn type_lowercased() {
        let mt = parse("IMAGE/SVG+XML").unwrap();
        assert_eq!(mt.essence(), "image/svg+xml");
    }

    #[test]
    fn multiple_parameters() {
        let mt = parse("text/html; charset=utf-8; foo=bar").unwrap();
        assert_eq!(mt.essence(), "text/html");
        assert_eq!(mt.param("charset"), Some("utf-8"));
        assert_eq!(mt.param("foo"), Some("bar"));
        assert_eq!(mt.param_count(), 2);
    }

    #[test]
    fn whitespace_around_parameters() {
        let mt = parse("text/html ; charset=utf-8 ; foo=bar").unwrap();
        assert_eq!(mt.param("charset"), Some("utf-8"));
        assert_eq!(mt.param("foo"), Some("bar"));

        let mt = parse("text/html;\tcharset\t=\tutf-8\t").unwrap();
        assert_eq!(mt.param("charset"), Some("utf-8"));
    }

    #[test]
    fn parameter_name_lowercased_value_preserved() {
        let mt = parse("text/html; Charset=UTF-8").unwrap();
        assert_eq!(mt.param("charset"), Some("UTF-8"));
        assert_eq!(mt.param("Charset"), None);
    }

    #[test]
    fn quoted_value_unwrapped() {
        let mt = parse("text/html; charset=\"UTF-8\"").unwrap();
        assert_eq!(mt.param("charset"), Some("UTF-8"));
    }

    #[test]
    fn quoted_pairs_decoded() {
        let mt = parse("text/html; charset = \"UT\\F-\\\\\\\"8\\\"\"").unwrap();
        assert_eq!(mt.param("charset"), Some("UTF-\\\"8\""));
    }

    #[test]
    fn quoted_value_may_contain_delimiters() {
        let mt = parse("text/html; param=\"charset=\\\"utf-8\\\"; foo=bar\"; bar=foo").unwrap();
        assert_eq!(mt.param("param"), Some("charset=\"utf-8\"; foo=bar"));
        assert_eq!(mt.param("bar"), Some("foo"));
    }

    #[test]
    fn empty_quoted_value() {
        let mt = parse("text/html; foo=\"\"").unwrap();
        assert_eq!(mt.param("foo"), Some(""));
    }

    #[test]
    fn duplicate_parameter_last_wins() {
        let mt = parse("text/plain; charset=utf-8; CHARSET=iso-8859-1").unwrap();
        assert_eq!(mt.param("charset"), Some("iso-8859-1"));
        assert_eq!(mt.param_count(), 1);
    }

    #[test]
    fn invalid_media_types_rejected() {
        for raw in [
            "",
            " ",
            "null",
            "undefined",
            "/",
            "text / plain",
            "text/;plain",
            "text/\"plain",
            "text/p£ain",
            "text/(plain)",
            "text/@plain",
            "text/plain,wrong",
        ] {
            assert_eq!(parse(raw), Err(ParseError::InvalidMediaType), "input: {raw:?}");
        }
    }

    #[test]
    fn unterminated_quote_rejected() {
        assert_eq!(
            parse("text/plain; foo=\"bar"),
            Err(ParseError::InvalidParameterFormat)
        );
    }

    #[test]
    fn unquoted_non_token_value_rejected() {
        assert_eq!(
            parse("text/plain; profile=http://localhost"),
            Err(ParseError::InvalidParameterFormat)
        );
        assert_eq!(
            parse("text/plain; profile=http://localhost; foo=bar"),
            Err(ParseError::InvalidParameterFormat)
        );
    }

    #[test]
    fn bare_trailing_semicolon_rejected() {
        assert_eq!(parse("text/html;"), Err(ParseError::InvalidParameterFormat));
        assert_eq!(
            parse("text/html; charset=utf-8;"),
            Err(ParseError::InvalidParameterFormat)
        );
    }

    #[test]
    fn parameter_without_value_rejected() {
        assert_eq!(
            parse("text/html; charset"),
            Err(ParseError::InvalidParameterFormat)
        );
        assert_eq!(
            parse("text/html; =utf-8"),
            Err(ParseError::InvalidParameterFormat)
        );
    }

    #[test]
    fn from_str_delegates() {
        let mt: MediaType = "application/json".parse().unwrap();
        assert_eq!(mt.essence(), "application/json");
        assert!("application".parse::<MediaType>().is_err());
    }
}
