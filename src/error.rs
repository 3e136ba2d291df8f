//! Error types
//!
//! The simulation itself never fails: game over and victory are states, not
//! errors. Only loading configuration from outside the binary can go wrong.

use thiserror::Error;

/// Failure to load a [`crate::Tuning`] or [`crate::Settings`] document
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or has mistyped fields
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field parsed but holds a value the simulation cannot use
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },

    /// The config file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}
