// contenttype-rs - HTTP Content-Type parsing and formatting
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thin adapters between transport-level header collections and the
//! [`contenttype`] core.
//!
//! The core only ever sees a plain string; this crate locates the
//! `content-type` field in a [`Headers`] collection (or in anything
//! implementing [`HasHeaders`]) and surfaces the core's own errors plus a
//! [`ContentTypeError::MissingHeaderValue`] when the field is absent.
//!
//! [`HasHeaders`] is the compile-time counterpart of duck-typed
//! "object with a Header field" access: any request- or response-like type
//! that can expose its headers gets `Content-Type` extraction for free.

mod headers;

pub use headers::{Header, Headers};

use contenttype::{parse, MediaType, ParseError};

/// Errors from `Content-Type` extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentTypeError {
    /// No `content-type` field is present in the collection.
    MissingHeaderValue,
    /// The field is present but its value does not parse.
    Parse(ParseError),
}

impl std::fmt::Display for ContentTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHeaderValue => write!(f, "content-type header is missing"),
            Self::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ContentTypeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingHeaderValue => None,
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<ParseError> for ContentTypeError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

/// Capability of exposing a header collection, implemented by request- and
/// response-like types.
pub trait HasHeaders {
    fn headers(&self) -> &Headers;
}

/// Extracts and parses the `content-type` field from a header collection.
///
/// # Examples
///
/// ```
/// use contenttype_http::{parse_header, Headers};
///
/// let mut headers = Headers::new();
/// headers.push("Content-Type", "text/html; charset=utf-8");
///
/// let mt = parse_header(&headers).unwrap();
/// assert_eq!(mt.essence(), "text/html");
/// ```
pub fn parse_header(headers: &Headers) -> Result<MediaType, ContentTypeError> {
    match headers.get("content-type") {
        Some(value) if !value.is_empty() => Ok(parse(value)?),
        _ => Err(ContentTypeError::MissingHeaderValue),
    }
}

/// Extracts and parses the `content-type` field from any type exposing
/// headers.
pub fn parse_from<T: HasHeaders>(subject: &T) -> Result<MediaType, ContentTypeError> {
    parse_header(subject.headers())
}
