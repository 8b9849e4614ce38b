//! Logging configuration from TOML (`[logging]` section)

use crate::config::expand_home;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Path of the JSONL conversation transcript; disabled when unset
    pub conversation_log: Option<String>,
}

impl FileLoggingConfig {
    /// Transcript path with `~/` expanded
    pub fn conversation_log_path(&self) -> Option<PathBuf> {
        self.conversation_log.as_deref().map(expand_home)
    }
}
