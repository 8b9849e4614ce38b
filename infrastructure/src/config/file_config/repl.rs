//! `[repl]` section: interactive session settings

use crate::config::{APP_DIR, expand_home};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const HISTORY_FILE: &str = "history.txt";

/// Interactive session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the phase spinner while a turn runs
    pub show_progress: bool,
    /// Line-editor history file; `~/` is expanded.
    /// Falls back to the platform data directory when unset.
    pub history_file: Option<String>,
    /// Keep no line history at all
    pub disable_history: bool,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            disable_history: false,
        }
    }
}

impl FileReplConfig {
    /// Where the line editor keeps its history, if anywhere
    pub fn history_path(&self) -> Option<PathBuf> {
        if self.disable_history {
            return None;
        }
        match self.history_file.as_deref() {
            Some(path) => Some(expand_home(path)),
            None => Self::default_history_path(),
        }
    }

    /// `<data dir>/tool-relay/history.txt`
    pub fn default_history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR).join(HISTORY_FILE))
    }
}
