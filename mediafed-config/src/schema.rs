use mediafed_ids::SEPARATOR;
use mediafed_rewrite::BackendInfo;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{ConfigError, ConfigResult};

/// Default cap on a single request or response body (32 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Top-level configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FederationConfig {
    /// Server identity presented to clients in every `ServerId` field.
    /// Generated at load time when absent.
    #[serde(default)]
    pub server_id: String,
    /// Human-readable name of the federated server.
    #[serde(default = "default_server_name")]
    pub server_name: String,
    #[serde(default, rename = "backend")]
    pub backends: Vec<BackendConfig>,
    #[serde(default)]
    pub limits: IngressLimits,
}

/// One backend media server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Routing prefix embedded in every id this backend produces (e.g. "s1").
    pub prefix: String,
    pub name: String,
    pub url: String,
    /// Provenance id shown to clients; defaults to the prefix.
    #[serde(default)]
    pub id: Option<String>,
}

/// Bounds enforced at the ingress before any body reaches a rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressLimits {
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_server_name() -> String {
    "mediafed".into()
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

impl Default for IngressLimits {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl IngressLimits {
    /// Rejects bodies larger than the configured limit.
    pub fn check_body(&self, size: usize) -> ConfigResult<()> {
        if size > self.max_body_bytes {
            return Err(ConfigError::BodyTooLarge {
                size,
                limit: self.max_body_bytes,
            });
        }
        Ok(())
    }
}

impl BackendConfig {
    /// Provenance metadata attached to this backend's items.
    pub fn info(&self) -> BackendInfo {
        BackendInfo::new(
            self.id.as_deref().unwrap_or(&self.prefix),
            &self.name,
            &self.url,
        )
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix {
                name: self.name.clone(),
            });
        }
        if mediafed_ids::is_reserved_prefix(&self.prefix) {
            return Err(ConfigError::ReservedPrefix {
                prefix: self.prefix.clone(),
            });
        }
        // A separator inside the prefix would split ids at the wrong place.
        if self.prefix.contains(SEPARATOR) {
            return Err(ConfigError::PrefixContainsSeparator {
                prefix: self.prefix.clone(),
                separator: SEPARATOR,
            });
        }
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "backend '{}' url must be http(s), got '{}'",
                self.prefix, self.url
            )));
        }
        Ok(())
    }
}

impl FederationConfig {
    /// Validates the backend list and limits.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server_id.is_empty() {
            return Err(ConfigError::Invalid("server_id is required".into()));
        }
        if self.backends.is_empty() {
            return Err(ConfigError::NoBackends);
        }
        if self.limits.max_body_bytes == 0 {
            return Err(ConfigError::Invalid(
                "limits.max_body_bytes must be greater than zero".into(),
            ));
        }

        let mut seen = HashSet::new();
        for backend in &self.backends {
            backend.validate()?;
            if !seen.insert(backend.prefix.as_str()) {
                return Err(ConfigError::DuplicatePrefix {
                    prefix: backend.prefix.clone(),
                });
            }
        }
        Ok(())
    }

    /// Looks up a backend by routing prefix.
    pub fn backend(&self, prefix: &str) -> Option<&BackendConfig> {
        self.backends.iter().find(|b| b.prefix == prefix)
    }

    /// Provenance for the backend owning `prefix`.
    pub fn backend_info(&self, prefix: &str) -> Option<BackendInfo> {
        self.backend(prefix).map(BackendConfig::info)
    }

    /// Resolves the backend that owns a client-facing id.
    ///
    /// Returns `None` for merged ids, unprefixed values and unknown prefixes.
    pub fn backend_for_id(&self, proxy_id: &str) -> Option<&BackendConfig> {
        if mediafed_ids::is_merged(proxy_id) {
            return None;
        }
        let prefix = mediafed_ids::decode_prefix(proxy_id).ok()?;
        self.backend(prefix)
    }
}
