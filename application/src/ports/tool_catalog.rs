//! Tool Catalog port
//!
//! Defines how the application layer discovers and invokes tools. How the
//! catalog indexes its tools and how it reaches them (HTTP, stdio, local
//! functions) is up to the adapter.

use async_trait::async_trait;
use relay_domain::tool::{
    entities::{ToolCall, ToolDescriptor},
    value_objects::ToolResult,
};
use thiserror::Error;

/// Errors from catalog discovery
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Port for tool discovery and invocation
#[async_trait]
pub trait ToolCatalogPort: Send + Sync {
    /// Return up to `limit` tools relevant to `query`.
    ///
    /// An empty list is a valid answer, not an error.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<ToolDescriptor>, CatalogError>;

    /// Invoke a tool.
    ///
    /// Ordinary failures (unknown tool, bad arguments, remote errors,
    /// timeouts) are reported as a failed [`ToolResult`], never as a panic.
    async fn invoke(&self, call: &ToolCall) -> ToolResult;
}
