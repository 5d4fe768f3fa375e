// contenttype-rs - HTTP Content-Type parsing and formatting
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing and canonical formatting of the HTTP `Content-Type` header
//! value (RFC 7231 §3.1.1.5, grammar from RFC 7230 §3.2.6).
//!
//! The crate converts between the wire form and [`MediaType`], a structured
//! `type/subtype` plus named parameters, in both directions:
//!
//! - [`parse`]: raw string → [`MediaType`], with strict rejection of
//!   malformed or trailing input,
//! - [`format`]: [`MediaType`] → canonical string, with parameters in
//!   sorted name order and values quoted exactly when needed.
//!
//! Both operations are pure and allocation-local; the only process-wide
//! state is the constant character-class tables in [`grammar`], safe for
//! unsynchronized concurrent use.
//!
//! # Examples
//!
//! ```
//! use contenttype::{parse, MediaType};
//!
//! let mt = parse("Text/HTML; Charset=UTF-8; foo=\"bar or \\\"baz\\\"\"").unwrap();
//! assert_eq!(mt.essence(), "text/html");
//! assert_eq!(mt.param("charset"), Some("UTF-8"));
//! assert_eq!(mt.param("foo"), Some("bar or \"baz\""));
//!
//! // Re-formatting yields the canonical representation.
//! assert_eq!(
//!     mt.canonical().unwrap(),
//!     "text/html; charset=UTF-8; foo=\"bar or \\\"baz\\\"\"",
//! );
//! ```
//!
//! Header extraction from a transport-level header collection lives in the
//! `contenttype-http` companion crate; this crate only ever sees plain
//! strings.

pub mod format;
pub mod grammar;
pub mod media_type;
pub mod parse;

pub use format::{format, FormatError};
pub use media_type::MediaType;
pub use parse::{parse, ParseError};
