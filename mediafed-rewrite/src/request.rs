//! Client → backend direction.

use serde_json::Value;
use tracing::debug;

use crate::{Result, RewriteError, TreeRewriter};

/// Rewrites a client request body so the backend sees its own ids.
///
/// Prefixed ids are stripped; values that do not decode pass through as-is.
/// Server identity fields are never touched in this direction.
pub fn rewrite_request(body: &[u8]) -> Result<Vec<u8>> {
    let mut doc: Value = serde_json::from_slice(body).map_err(|e| {
        debug!(bytes = body.len(), error = %e, "Client request is not valid JSON");
        RewriteError::Parse(e)
    })?;
    rewrite_request_value(&mut doc);
    serde_json::to_vec(&doc).map_err(RewriteError::Serialize)
}

/// In-place variant of [`rewrite_request`] for an already parsed document.
pub fn rewrite_request_value(doc: &mut Value) {
    TreeRewriter::new(|id: &str| mediafed_ids::decode_or_passthrough(id).to_owned()).rewrite(doc);
}
