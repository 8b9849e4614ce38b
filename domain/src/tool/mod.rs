//! Tool domain module
//!
//! This module defines how the conversation loop sees remotely invocable
//! tools. Tools are discovered from a catalog as [`ToolDescriptor`]s,
//! requested by the model as a [`ToolCall`] directive, and answer with a
//! [`ToolResult`].
//!
//! ```text
//! ┌────────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolDescriptor │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (catalog)      │    │ (directive)  │    │ (ok / error) │
//! └────────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! # Directive Grammar
//!
//! The model has text capability only. A tool request is a bare JSON object:
//!
//! ```json
//! {"tool_name": "demo.echo", "arguments": {"value": "hi"}}
//! ```
//!
//! [`parsing::interpret`] extracts it from free-form text on a best-effort
//! basis; anything that does not match is a plain assistant reply.
//!
//! # Key Types
//!
//! - [`ToolDescriptor`]: name (`<provider>.<tool>`), description, input schema
//! - [`ToolCall`]: a parsed invocation request
//! - [`ToolResult`]: success value or [`ToolError`]

pub mod entities;
pub mod parsing;
pub mod value_objects;

pub use entities::{ToolCall, ToolDescriptor};
pub use parsing::interpret;
pub use value_objects::{ToolError, ToolResult};
