//! Client-facing identifiers of the form `prefix_backendId`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{IdError, Result};

/// Separates the routing prefix from the backend identifier.
pub const SEPARATOR: char = '_';

/// Builds a proxy identifier from a backend prefix and a backend-native id.
///
/// An empty backend id maps to an empty string so that absent identifiers
/// stay absent instead of turning into a bare `prefix_`.
#[must_use]
pub fn encode(prefix: &str, backend_id: &str) -> String {
    if backend_id.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(prefix.len() + SEPARATOR.len_utf8() + backend_id.len());
    out.push_str(prefix);
    out.push(SEPARATOR);
    out.push_str(backend_id);
    out
}

/// Splits a proxy identifier into `(prefix, backend_id)` at the first separator.
///
/// Fails with [`IdError::NoPrefixFound`] when there is no separator or the
/// prefix would be empty. That failure is the normal answer for values this
/// proxy never produced.
pub fn decode(proxy_id: &str) -> Result<(&str, &str)> {
    match proxy_id.split_once(SEPARATOR) {
        Some((prefix, backend_id)) if !prefix.is_empty() => Ok((prefix, backend_id)),
        _ => Err(IdError::NoPrefixFound(proxy_id.to_owned())),
    }
}

/// Returns only the routing prefix of a proxy identifier.
pub fn decode_prefix(proxy_id: &str) -> Result<&str> {
    decode(proxy_id).map(|(prefix, _)| prefix)
}

/// Strips the routing prefix when there is one, otherwise returns the input.
#[must_use]
pub fn decode_or_passthrough(value: &str) -> &str {
    match value.split_once(SEPARATOR) {
        Some((prefix, backend_id)) if !prefix.is_empty() => backend_id,
        _ => value,
    }
}

/// An owned, already-validated proxy identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProxyId {
    raw: String,
    /// Byte offset of the separator inside `raw`.
    split: usize,
}

impl ProxyId {
    /// Creates a proxy identifier. Returns `None` for an empty backend id,
    /// which has no proxy form.
    #[must_use]
    pub fn new(prefix: &str, backend_id: &str) -> Option<Self> {
        if backend_id.is_empty() {
            return None;
        }
        Some(Self {
            raw: encode(prefix, backend_id),
            split: prefix.len(),
        })
    }

    /// Parses a proxy identifier from a string.
    pub fn parse(s: &str) -> Result<Self> {
        let prefix = decode_prefix(s)?;
        Ok(Self {
            raw: s.to_owned(),
            split: prefix.len(),
        })
    }

    /// The backend routing prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.raw[..self.split]
    }

    /// The backend-native identifier.
    #[must_use]
    pub fn backend_id(&self) -> &str {
        &self.raw[self.split + SEPARATOR.len_utf8()..]
    }

    /// The full client-facing form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ProxyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ProxyId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProxyId {
    type Error = IdError;

    fn try_from(raw: String) -> Result<Self> {
        let split = decode_prefix(&raw)?.len();
        Ok(Self { raw, split })
    }
}

impl From<ProxyId> for String {
    fn from(id: ProxyId) -> Self {
        id.raw
    }
}
