//! Startup configuration for mediafed.
//!
//! A [`FederationConfig`] names the proxy's own server identity and every
//! backend it fronts. Loading validates the backend prefixes once, so the
//! identifier codec can trust them at runtime:
//! - every prefix is non-empty and unique
//! - no prefix contains the `_` separator
//! - no backend uses the reserved `merged` prefix

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{from_toml_str, load_config};
pub use schema::{BackendConfig, DEFAULT_MAX_BODY_BYTES, FederationConfig, IngressLimits};
