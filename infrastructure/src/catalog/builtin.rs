//! In-process tool catalog
//!
//! Keeps registered tools in name order. Search is a case-insensitive
//! keyword filter over tool names and descriptions; invocation validates
//! the arguments against the descriptor's schema before dispatching.

use async_trait::async_trait;
use relay_application::ports::tool_catalog::{CatalogError, ToolCatalogPort};
use relay_domain::{DomainError, ToolCall, ToolDescriptor, ToolError, ToolResult};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::debug;

/// Handler for one registered tool
pub type ToolHandler = fn(&ToolCall) -> Result<Value, ToolError>;

/// Words too common to discriminate between tools
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "you", "your", "what", "with", "can", "please", "how", "are", "this",
    "that", "from", "into", "about", "some", "give", "tell", "want", "need", "would",
];

struct RegisteredTool {
    descriptor: ToolDescriptor,
    handler: ToolHandler,
}

/// Tool catalog backed by in-process handlers
#[derive(Default)]
pub struct BuiltinToolCatalog {
    tools: BTreeMap<String, RegisteredTool>,
}

impl BuiltinToolCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the sample tools registered
    pub fn with_samples() -> Self {
        let mut catalog = Self::new();
        for (descriptor, handler) in super::samples::all() {
            let registered = catalog.register(descriptor, handler);
            debug_assert!(registered.is_ok(), "sample tool name: {registered:?}");
        }
        catalog
    }

    /// Register a tool, replacing any tool with the same name.
    ///
    /// Names must be namespaced as `provider.tool`.
    pub fn register(
        &mut self,
        descriptor: ToolDescriptor,
        handler: ToolHandler,
    ) -> Result<(), DomainError> {
        descriptor.split_name()?;
        debug!("Registering tool: {}", descriptor.name);
        self.tools.insert(
            descriptor.name.clone(),
            RegisteredTool {
                descriptor,
                handler,
            },
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Descriptors matching the query, in name order, at most `limit`.
    pub fn matching(&self, query: &str, limit: usize) -> Vec<ToolDescriptor> {
        let keywords = keywords(query);
        let list_all = query.trim().is_empty();

        self.tools
            .values()
            .map(|tool| &tool.descriptor)
            .filter(|descriptor| list_all || matches_any(descriptor, &keywords))
            .take(limit)
            .cloned()
            .collect()
    }
}

/// Lowercased alphanumeric words worth matching on
fn keywords(query: &str) -> Vec<String> {
    query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.len() >= 3)
        .map(str::to_lowercase)
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
        .collect()
}

fn matches_any(descriptor: &ToolDescriptor, keywords: &[String]) -> bool {
    let name = descriptor.name.to_lowercase();
    let description = descriptor.description.to_lowercase();
    keywords
        .iter()
        .any(|kw| name.contains(kw.as_str()) || description.contains(kw.as_str()))
}

/// Check required arguments and primitive types declared in the schema.
fn validate_arguments(descriptor: &ToolDescriptor, call: &ToolCall) -> Result<(), ToolError> {
    for name in descriptor.required_arguments() {
        if !call.arguments.contains_key(name) {
            return Err(ToolError::invalid_argument(format!(
                "Missing required argument: {}",
                name
            )));
        }
    }

    let Some(properties) = descriptor
        .input_schema
        .get("properties")
        .and_then(Value::as_object)
    else {
        return Ok(());
    };

    for (name, value) in &call.arguments {
        let Some(expected) = properties
            .get(name)
            .and_then(|p| p.get("type"))
            .and_then(Value::as_str)
        else {
            continue;
        };

        let valid = match expected {
            "string" => value.is_string(),
            "integer" => value.is_i64() || value.is_u64(),
            "number" => value.is_number(),
            "boolean" => value.is_boolean(),
            "object" => value.is_object(),
            "array" => value.is_array(),
            _ => true,
        };
        if !valid {
            return Err(ToolError::invalid_argument(format!(
                "Argument '{}' must be of type {}",
                name, expected
            )));
        }
    }

    Ok(())
}

#[async_trait]
impl ToolCatalogPort for BuiltinToolCatalog {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<ToolDescriptor>, CatalogError> {
        let found = self.matching(query, limit);
        debug!("Catalog search '{}' matched {} tools", query, found.len());
        Ok(found)
    }

    async fn invoke(&self, call: &ToolCall) -> ToolResult {
        let started = Instant::now();

        let Some(tool) = self.tools.get(&call.tool_name) else {
            return ToolResult::failure(&call.tool_name, ToolError::not_found(&call.tool_name));
        };

        let result = match validate_arguments(&tool.descriptor, call)
            .and_then(|()| (tool.handler)(call))
        {
            Ok(value) => ToolResult::success(&call.tool_name, value),
            Err(error) => ToolResult::failure(&call.tool_name, error),
        };

        result.with_duration(started.elapsed().as_millis() as u64)
    }
}
