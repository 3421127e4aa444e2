//! Virtual identifiers for collections aggregated across every backend.

use crate::SEPARATOR;

/// Prefix reserved for merged collection identifiers. No backend may use it.
pub const MERGED_PREFIX: &str = "merged";

/// Builds the merged identifier for a collection type (e.g. `movies`).
/// The collection type is taken verbatim, empty or not.
#[must_use]
pub fn encode_merged(collection_type: &str) -> String {
    format!("{MERGED_PREFIX}{SEPARATOR}{collection_type}")
}

/// Returns the collection type when `id` is a merged identifier.
///
/// Only a strict leading `merged_` counts; `s1_merged_movies` is a regular
/// proxy identifier whose backend id happens to start with `merged`.
#[must_use]
pub fn decode_merged(id: &str) -> Option<&str> {
    id.strip_prefix(MERGED_PREFIX)?.strip_prefix(SEPARATOR)
}

/// Returns true when `id` is a merged identifier.
#[must_use]
pub fn is_merged(id: &str) -> bool {
    decode_merged(id).is_some()
}

/// Returns true when a backend prefix would collide with merged identifiers.
#[must_use]
pub fn is_reserved_prefix(prefix: &str) -> bool {
    prefix == MERGED_PREFIX
}
