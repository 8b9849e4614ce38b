//! Application-level configuration.
//!
//! - [`ExecutionParams`]: turn loop control (catalog search limit)

pub mod execution_params;

pub use execution_params::{DEFAULT_SEARCH_LIMIT, ExecutionParams};
