//! Tool catalog adapters
//!
//! [`BuiltinToolCatalog`] is an in-process implementation of the
//! [`ToolCatalogPort`](relay_application::ToolCatalogPort): tools are
//! registered with a JSON-Schema-like descriptor and a handler function.

mod builtin;
pub mod samples;

pub use builtin::{BuiltinToolCatalog, ToolHandler};
