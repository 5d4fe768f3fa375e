// contenttype-rs - HTTP Content-Type parsing and formatting
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical wire-format rendering of a [`MediaType`].
//!
//! Output is deterministic: parameters are emitted in ascending name order
//! regardless of how the value was built, so the same parameter set always
//! produces byte-identical output. This makes `format` usable as a
//! canonicalization step.

use smol_str::SmolStr;

use crate::grammar;
use crate::media_type::MediaType;

/// Reasons a [`MediaType`] refuses to render.
///
/// Caller-built values are not validated on construction, so every field
/// is re-checked here; a failure means nothing is emitted at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The essence is not `token "/" token`.
    InvalidType,
    /// The named parameter is not a token.
    InvalidParameterName(SmolStr),
    /// The named parameter's value contains a character no rendering can
    /// carry (e.g. NUL or a control byte).
    InvalidParameterValue(SmolStr),
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidType => write!(f, "invalid type"),
            Self::InvalidParameterName(name) => write!(f, "invalid parameter name: {}", name),
            Self::InvalidParameterValue(name) => {
                write!(f, "invalid parameter value for: {}", name)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Renders `value` as a `Content-Type` header value.
///
/// Parameter values that are tokens are written bare; anything else that
/// fits the quoted-string class (the empty string included) is written
/// quoted with `\` and `"` escaped.
///
/// # Examples
///
/// ```
/// use contenttype::{format, MediaType};
///
/// let mt = MediaType::new("text/html").with_param("foo", "bar or \"baz\"");
/// assert_eq!(format(&mt).unwrap(), "text/html; foo=\"bar or \\\"baz\\\"\"");
/// ```
pub fn format(value: &MediaType) -> Result<String, FormatError> {
    if !grammar::is_type_subtype(value.essence()) {
        return Err(FormatError::InvalidType);
    }

    let mut out = String::from(value.essence());
    for (name, val) in value.params() {
        if !grammar::is_token(name) {
            return Err(FormatError::InvalidParameterName(SmolStr::new(name)));
        }
        out.push_str("; ");
        out.push_str(name);
        out.push('=');
        if grammar::is_token(val) {
            out.push_str(val);
        } else if grammar::is_quotable(val) {
            out.push('"');
            out.push_str(&grammar::escape_quoted(val));
            out.push('"');
        } else {
            return Err(FormatError::InvalidParameterValue(SmolStr::new(name)));
        }
    }

    Ok(out)
}
