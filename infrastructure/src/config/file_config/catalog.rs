//! Catalog configuration from TOML (`[catalog]` section)

use serde::{Deserialize, Serialize};

/// Raw tool catalog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Maximum number of tools discovered per turn
    pub search_limit: usize,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            search_limit: relay_application::config::DEFAULT_SEARCH_LIMIT,
        }
    }
}
