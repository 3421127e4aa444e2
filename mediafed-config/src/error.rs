//! Configuration error types.

use thiserror::Error;

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("configuration file is empty")]
    EmptyConfigFile,

    #[error("no backends defined in configuration")]
    NoBackends,

    #[error("backend '{name}' has an empty prefix")]
    EmptyPrefix { name: String },

    /// The prefix would make the backend's ids look like merged collection ids.
    #[error("backend prefix '{prefix}' is reserved")]
    ReservedPrefix { prefix: String },

    #[error("backend prefix '{prefix}' contains the id separator '{separator}'")]
    PrefixContainsSeparator { prefix: String, separator: char },

    #[error("duplicate backend prefix: '{prefix}'")]
    DuplicatePrefix { prefix: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("body of {size} bytes exceeds the {limit} byte limit")]
    BodyTooLarge { size: usize, limit: usize },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
