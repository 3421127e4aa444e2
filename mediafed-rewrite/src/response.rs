//! Backend → client direction.

use serde_json::Value;
use tracing::debug;

use crate::{BackendInfo, Result, RewriteError, TreeRewriter};

/// Rewrites one backend response body into its client-facing form.
///
/// Item ids gain the backend's `prefix`, server identity fields become
/// `server_id` (when non-empty), and `backend` provenance is attached to
/// every object with an `Id`. Nothing is returned on failure.
pub fn rewrite_response(
    body: &[u8],
    prefix: &str,
    server_id: &str,
    backend: Option<&BackendInfo>,
) -> Result<Vec<u8>> {
    let mut doc: Value = serde_json::from_slice(body).map_err(|e| {
        debug!(prefix, bytes = body.len(), error = %e, "Backend response is not valid JSON");
        RewriteError::Parse(e)
    })?;
    rewrite_response_value(&mut doc, prefix, server_id, backend);
    serde_json::to_vec(&doc).map_err(RewriteError::Serialize)
}

/// In-place variant of [`rewrite_response`] for an already parsed document.
pub fn rewrite_response_value(
    doc: &mut Value,
    prefix: &str,
    server_id: &str,
    backend: Option<&BackendInfo>,
) {
    debug!(prefix, provenance = backend.is_some(), "Rewriting backend response");
    TreeRewriter::new(|id: &str| mediafed_ids::encode(prefix, id))
        .replace_server_id(server_id)
        .inject_backend(backend)
        .rewrite(doc);
}
