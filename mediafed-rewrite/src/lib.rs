//! Identifier rewriting for mediafed.
//!
//! Backends answer with their own item ids and server identity. Clients must
//! only ever see proxy ids, and backends must only ever see their own ids:
//! - [`rewrite_response`] encodes every item id with the backend's prefix and
//!   replaces the server identity with the proxy's own
//! - [`rewrite_request`] strips prefixes from client-supplied ids
//!
//! Both are built on [`TreeRewriter`], which walks a `serde_json::Value` and
//! applies the [`FieldRegistry`] rules in place. Every call owns its document,
//! so any number of calls may run concurrently.

mod backend;
mod fields;
mod request;
mod response;
mod walker;

pub use backend::BackendInfo;
pub use fields::{FieldRegistry, ID_FIELD, ITEM_ID_FIELDS, SERVER_IDENTITY_FIELDS};
pub use request::{rewrite_request, rewrite_request_value};
pub use response::{rewrite_response, rewrite_response_value};
pub use walker::TreeRewriter;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, RewriteError>;

/// Errors that can occur while rewriting a document.
///
/// Neither is worth retrying: the same bytes will fail the same way.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("invalid JSON document: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize rewritten document: {0}")]
    Serialize(#[source] serde_json::Error),
}
