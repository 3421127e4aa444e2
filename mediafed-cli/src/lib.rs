//! Commands behind the `mediafed` operator binary.
//!
//! Each command is a plain function over bytes and a loaded configuration so
//! captured traffic can be replayed through the rewriters without a server.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use mediafed_config::FederationConfig;
use serde::Serialize;
use tracing::debug;

/// What a client-facing identifier refers to.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IdDescription {
    /// A virtual collection spanning every backend.
    Merged { collection_type: String },
    /// An item owned by one backend.
    Proxy {
        prefix: String,
        backend_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        backend_name: Option<String>,
    },
    /// Not produced by this proxy.
    Unmanaged { value: String },
}

/// Reads a body from `path`, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Rewrites a captured backend response as the proxy would serve it.
pub fn rewrite_response(
    config: &FederationConfig,
    prefix: &str,
    body: &[u8],
    provenance: bool,
) -> Result<Vec<u8>> {
    let Some(backend) = config.backend(prefix) else {
        bail!("No backend configured with prefix '{prefix}'");
    };
    config.limits.check_body(body.len())?;

    let info = provenance.then(|| backend.info());
    debug!(prefix, backend = %backend.name, bytes = body.len(), "Rewriting response");
    mediafed_rewrite::rewrite_response(body, prefix, &config.server_id, info.as_ref())
        .context("Backend response could not be rewritten")
}

/// Rewrites a captured client request as a backend would receive it.
pub fn rewrite_request(config: &FederationConfig, body: &[u8]) -> Result<Vec<u8>> {
    config.limits.check_body(body.len())?;
    debug!(bytes = body.len(), "Rewriting request");
    mediafed_rewrite::rewrite_request(body).context("Client request could not be rewritten")
}

/// Classifies an identifier, resolving the backend name when a config is given.
pub fn describe_id(id: &str, config: Option<&FederationConfig>) -> IdDescription {
    if let Some(collection_type) = mediafed_ids::decode_merged(id) {
        return IdDescription::Merged {
            collection_type: collection_type.to_owned(),
        };
    }
    match mediafed_ids::decode(id) {
        Ok((prefix, backend_id)) => IdDescription::Proxy {
            prefix: prefix.to_owned(),
            backend_id: backend_id.to_owned(),
            backend_name: config
                .and_then(|c| c.backend(prefix))
                .map(|b| b.name.clone()),
        },
        Err(e) => IdDescription::Unmanaged {
            value: e.into_input(),
        },
    }
}

/// One-line-per-backend summary of a validated configuration.
pub fn summarize(config: &FederationConfig) -> String {
    let mut out = format!(
        "server: {} ({})\nmax body: {} bytes\n",
        config.server_name, config.server_id, config.limits.max_body_bytes
    );
    for backend in &config.backends {
        out.push_str(&format!(
            "  {:<8} {:<20} {}\n",
            backend.prefix, backend.name, backend.url
        ));
    }
    out
}
