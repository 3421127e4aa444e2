//! Configuration loading.

use std::path::Path;
use tracing::{info, warn};

use crate::{ConfigError, ConfigResult, FederationConfig};

/// Loads, completes and validates a TOML configuration file.
pub fn load_config(path: &Path) -> ConfigResult<FederationConfig> {
    let contents = std::fs::read_to_string(path)?;
    let config = from_toml_str(&contents)?;
    info!(
        path = %path.display(),
        backends = config.backends.len(),
        "Configuration loaded"
    );
    Ok(config)
}

/// Parses and validates configuration text.
///
/// A missing `server_id` is replaced with a fresh random one. That identity
/// changes on every restart, so clients will treat the proxy as a new server.
pub fn from_toml_str(contents: &str) -> ConfigResult<FederationConfig> {
    if contents.trim().is_empty() {
        return Err(ConfigError::EmptyConfigFile);
    }

    let mut config: FederationConfig = toml::from_str(contents)?;
    if config.server_id.is_empty() {
        config.server_id = uuid::Uuid::new_v4().simple().to_string();
        warn!(server_id = %config.server_id, "No server_id configured, generated one");
    }

    config.validate()?;
    Ok(config)
}
