use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading a [`BridgeConfig`](crate::config::BridgeConfig).
///
/// Bridging itself never fails; configuration is the only fallible surface.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "policy-config")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "policy-config")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid config: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
