//! Configuration file loading for tool-relay
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `RELAY_`-prefixed environment variables (`RELAY_GATEWAY__MODEL`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./relay.toml` or `./.relay.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/tool-relay/config.toml`
//! 5. Default values

mod file_config;
mod loader;

use std::path::PathBuf;

/// Directory name under the platform config and data directories
const APP_DIR: &str = "tool-relay";

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

pub use file_config::{
    ConfigValidationError, FileCatalogConfig, FileConfig, FileGatewayConfig, FileLoggingConfig,
    FileReplConfig,
};
pub use loader::ConfigLoader;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/tmp/x.jsonl"), PathBuf::from("/tmp/x.jsonl"));
        assert_eq!(expand_home("logs/~/x"), PathBuf::from("logs/~/x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs/x.jsonl"), home.join("logs/x.jsonl"));
        }
    }
}
