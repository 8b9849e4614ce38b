//! Execution parameters: turn loop control.
//!
//! [`ExecutionParams`] groups the static parameters that control
//! [`RunTurnUseCase`](crate::use_cases::run_turn::RunTurnUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};

/// Default number of tool descriptors requested from the catalog per turn.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Turn loop control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Maximum number of tools discovered for one utterance.
    pub search_limit: usize,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl ExecutionParams {
    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }
}
