#![forbid(unsafe_code)]

//! Bridge configuration.
//!
//! Only diagnostics are configurable; bridging semantics are fixed. With the
//! `policy-config` feature the configuration can be loaded from TOML or JSON:
//!
//! ```toml
//! [diagnostics]
//! record_fallbacks = true
//! record_stale_tokens = false
//! capacity = 64
//! ```
//!
//! Missing fields take their defaults; unknown fields are rejected.

#[cfg(feature = "policy-config")]
use std::path::Path;

use crate::diagnostics::DiagnosticsScope;
use crate::error::{ConfigError, Result};

/// Default number of records retained per diagnostics scope.
pub const DEFAULT_CAPACITY: usize = 256;

/// What a [`DiagnosticsScope`] keeps.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "policy-config",
    derive(serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct DiagnosticsConfig {
    /// Keep a record per fallback substitution.
    pub record_fallbacks: bool,
    /// Keep a record per stale token dropped by a projected setter.
    pub record_stale_tokens: bool,
    /// Maximum records kept per kind; oldest are evicted first.
    pub capacity: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            record_fallbacks: true,
            record_stale_tokens: true,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn with_record_fallbacks(mut self, enabled: bool) -> Self {
        self.record_fallbacks = enabled;
        self
    }

    #[must_use]
    pub fn with_record_stale_tokens(mut self, enabled: bool) -> Self {
        self.record_stale_tokens = enabled;
        self
    }

    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

/// Top-level bridge configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "policy-config",
    derive(serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct BridgeConfig {
    pub diagnostics: DiagnosticsConfig,
}

impl BridgeConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticsConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Reject configurations that cannot be honored.
    pub fn validate(&self) -> Result<()> {
        if self.diagnostics.capacity == 0 {
            return Err(ConfigError::invalid(
                "diagnostics.capacity must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Start a diagnostics scope with this configuration.
    pub fn diagnostics_scope(&self) -> DiagnosticsScope {
        DiagnosticsScope::begin(self.diagnostics.clone())
    }

    /// Parse and validate a TOML document.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    #[cfg(feature = "policy-config")]
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.toml` or `.json` file.
    #[cfg(feature = "policy-config")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}
