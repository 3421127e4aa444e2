//! Identifier codec for mediafed.
//!
//! Every item identifier a client sees is a [`ProxyId`]: the routing prefix of
//! the backend that owns the item, a `_` separator, and the backend's own
//! identifier. The prefix lets the router pick a backend without a lookup and
//! keeps backend addresses out of client hands.
//!
//! Virtual collections that span every backend use the reserved `merged`
//! prefix instead (see [`encode_merged`]). Those identifiers never resolve to
//! a real backend.

mod merged;
mod proxy_id;

pub use merged::{MERGED_PREFIX, decode_merged, encode_merged, is_merged, is_reserved_prefix};
pub use proxy_id::{ProxyId, SEPARATOR, decode, decode_or_passthrough, decode_prefix, encode};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, IdError>;

/// Errors produced while decoding identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The value carries no routing prefix. Holds the original input so the
    /// caller can pass it through untouched.
    #[error("no proxy prefix found in {0:?}")]
    NoPrefixFound(String),
}

impl IdError {
    /// Returns the input that failed to decode.
    #[must_use]
    pub fn into_input(self) -> String {
        match self {
            Self::NoPrefixFound(input) => input,
        }
    }

    /// Borrows the input that failed to decode.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::NoPrefixFound(input) => input,
        }
    }
}
