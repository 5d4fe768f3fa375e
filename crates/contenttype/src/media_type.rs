// contenttype-rs - HTTP Content-Type parsing and formatting
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;

use smol_str::SmolStr;

/// A structured `Content-Type` value: a `type/subtype` pair plus named
/// parameters, e.g. `text/html; charset=utf-8`.
///
/// Instances are value objects. They come from one of two places:
///
/// - [`parse`](crate::parse::parse), which validates the wire form and
///   lowercases the media type and parameter names, or
/// - the builder methods below, which perform *no* validation — a
///   caller-built value is checked in full by
///   [`format`](crate::format::format), which refuses to emit anything
///   malformed.
///
/// Parameter values are stored unescaped; quoting is a wire-format concern
/// handled entirely by the parser and formatter.
///
/// # Examples
///
/// ```
/// use contenttype::MediaType;
///
/// let mt = MediaType::new("text/html").with_param("charset", "utf-8");
/// assert_eq!(mt.essence(), "text/html");
/// assert_eq!(mt.param("charset"), Some("utf-8"));
/// assert_eq!(mt.canonical().unwrap(), "text/html; charset=utf-8");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaType {
    pub(crate) essence: SmolStr,
    pub(crate) parameters: BTreeMap<SmolStr, SmolStr>,
}

impl MediaType {
    /// Creates a media type with no parameters.
    ///
    /// `essence` is kept exactly as supplied, case included; validation is
    /// deferred to formatting.
    pub fn new(essence: impl AsRef<str>) -> Self {
        Self {
            essence: SmolStr::new(essence.as_ref()),
            parameters: BTreeMap::new(),
        }
    }

    /// Adds a parameter, consuming and returning `self` (builder form).
    ///
    /// The name is stored as supplied. Inserting an existing key replaces
    /// the earlier value.
    pub fn with_param(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.set_param(name, value);
        self
    }

    /// Adds or replaces a parameter in place.
    pub fn set_param(&mut self, name: impl AsRef<str>, value: impl AsRef<str>) {
        self.parameters
            .insert(SmolStr::new(name.as_ref()), SmolStr::new(value.as_ref()));
    }

    /// Returns the full `type/subtype` string.
    pub fn essence(&self) -> &str {
        &self.essence
    }

    /// Returns the top-level type (the part before `/`), when present.
    pub fn top_level(&self) -> Option<&str> {
        self.essence.split_once('/').map(|(ty, _)| ty)
    }

    /// Returns the subtype (the part after `/`), when present.
    pub fn subtype(&self) -> Option<&str> {
        self.essence.split_once('/').map(|(_, subtype)| subtype)
    }

    /// Looks up a parameter value by exact name.
    ///
    /// Parsed values always use lowercase names, so lookups with a
    /// lowercase name behave case-insensitively for parsed input.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(|v| v.as_str())
    }

    /// Iterates over parameters in ascending name order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of parameters.
    pub fn param_count(&self) -> usize {
        self.parameters.len()
    }

    /// Returns true if any parameters are present.
    pub fn has_params(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Renders the canonical wire form; see [`format`](crate::format::format).
    pub fn canonical(&self) -> Result<String, crate::format::FormatError> {
        crate::format::format(self)
    }
}
