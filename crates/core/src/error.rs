//! Error types for storage adapters and configuration loading.
//!
//! None of these reach the storefront user: the search overlay logs and
//! swallows storage errors, and configuration errors fall back to defaults.

use thiserror::Error;

/// Failure reading or writing a local storage slot.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("malformed value under '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure reading `novella.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: &'static str, message: String },
}

impl StoreError {
    /// Whether the stored value exists but could not be decoded.
    pub fn is_malformed(&self) -> bool {
        matches!(self, StoreError::Malformed { .. })
    }
}
