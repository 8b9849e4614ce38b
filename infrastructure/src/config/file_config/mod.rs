//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every section falls back to its defaults.

mod catalog;
mod gateway;
mod logging;
mod repl;

pub use catalog::FileCatalogConfig;
pub use gateway::FileGatewayConfig;
pub use logging::FileLoggingConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("gateway.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("catalog.search_limit cannot be 0")]
    InvalidSearchLimit,

    #[error("gateway.model cannot be empty")]
    EmptyModelName,

    #[error("gateway.base_url cannot be empty")]
    EmptyBaseUrl,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat-completion endpoint settings
    pub gateway: FileGatewayConfig,
    /// Tool discovery settings
    pub catalog: FileCatalogConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript logging
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected problems.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.gateway.model.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyModelName);
        }
        if self.gateway.base_url.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyBaseUrl);
        }
        if self.gateway.timeout_seconds == 0 {
            errors.push(ConfigValidationError::InvalidTimeout);
        }
        if self.catalog.search_limit == 0 {
            errors.push(ConfigValidationError::InvalidSearchLimit);
        }

        errors
    }

    /// Render the effective configuration as TOML (for `--show-config`)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
