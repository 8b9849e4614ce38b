//! Tool domain entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Description of a callable tool as returned by the catalog
///
/// Immutable once returned for a query. The `input_schema` is passed to the
/// model verbatim and is not interpreted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Globally unique name, namespaced as `<provider>.<tool>`
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// JSON-Schema-like description of the arguments
    pub input_schema: Value,
}

impl ToolDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }

    /// Split the name into `(provider, tool)`.
    ///
    /// The provider is everything before the first `.`; both parts must be
    /// non-empty.
    pub fn split_name(&self) -> Result<(&str, &str), DomainError> {
        match self.name.split_once('.') {
            Some((provider, tool)) if !provider.is_empty() && !tool.is_empty() => {
                Ok((provider, tool))
            }
            _ => Err(DomainError::InvalidToolName(self.name.clone())),
        }
    }

    pub fn provider(&self) -> Option<&str> {
        self.split_name().ok().map(|(provider, _)| provider)
    }

    /// Names of the arguments listed under `required` in the input schema
    pub fn required_arguments(&self) -> Vec<&str> {
        self.input_schema
            .get("required")
            .and_then(|v| v.as_array())
            .map(|required| required.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default()
    }
}

/// A request to invoke a tool, parsed from model output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: Map::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Build a call from a parsed JSON value.
    ///
    /// The value must be an object with a non-empty `tool_name` string and
    /// an `arguments` object. Extra fields are ignored.
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let object = value
            .as_object()
            .ok_or_else(|| DomainError::MalformedDirective("not a JSON object".to_string()))?;

        let tool_name = object
            .get("tool_name")
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                DomainError::MalformedDirective("missing `tool_name` string".to_string())
            })?;

        let arguments = object
            .get("arguments")
            .and_then(|v| v.as_object())
            .ok_or_else(|| {
                DomainError::MalformedDirective("missing `arguments` object".to_string())
            })?;

        Ok(Self {
            tool_name: tool_name.to_string(),
            arguments: arguments.clone(),
        })
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument or return an error message
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .ok_or_else(|| format!("Missing required argument: {}", key))
    }

    /// Get an optional i64 argument
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.arguments.get(key).and_then(|v| v.as_i64())
    }

    /// Get an optional f64 argument (integers are accepted too)
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.arguments.get(key).and_then(|v| v.as_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_name() {
        let tool = ToolDescriptor::new("demo.echo", "Echo", json!({}));
        assert_eq!(tool.split_name().unwrap(), ("demo", "echo"));
        assert_eq!(tool.provider(), Some("demo"));

        // Only the first dot separates the provider
        let nested = ToolDescriptor::new("gym.workout.log", "Log", json!({}));
        assert_eq!(nested.split_name().unwrap(), ("gym", "workout.log"));
    }

    #[test]
    fn test_split_name_rejects_bare_names() {
        for name in ["echo", ".echo", "demo.", ""] {
            let tool = ToolDescriptor::new(name, "x", json!({}));
            assert!(
                matches!(tool.split_name(), Err(DomainError::InvalidToolName(_))),
                "{name:?} should be rejected"
            );
            assert!(tool.provider().is_none());
        }
    }

    #[test]
    fn test_required_arguments() {
        let tool = ToolDescriptor::new(
            "gym.log_exercise",
            "Log",
            json!({
                "type": "object",
                "properties": {"sets": {"type": "integer"}},
                "required": ["exercise_name", "sets"]
            }),
        );
        assert_eq!(tool.required_arguments(), vec!["exercise_name", "sets"]);

        let no_schema = ToolDescriptor::new("demo.ping", "Ping", Value::Null);
        assert!(no_schema.required_arguments().is_empty());
    }

    #[test]
    fn test_tool_call_from_json() {
        let call = ToolCall::from_json(&json!({
            "tool_name": "svc.echo",
            "arguments": {"value": "hi"},
            "reason": "ignored"
        }))
        .unwrap();

        assert_eq!(call.tool_name, "svc.echo");
        assert_eq!(call.get_string("value"), Some("hi"));
        assert_eq!(call.require_string("value").unwrap(), "hi");
        assert!(call.require_string("missing").is_err());
    }

    #[test]
    fn test_tool_call_from_json_rejects_wrong_shapes() {
        let cases = [
            json!(["svc.echo"]),
            json!({"arguments": {}}),
            json!({"tool_name": "", "arguments": {}}),
            json!({"tool_name": 42, "arguments": {}}),
            json!({"tool_name": "svc.echo"}),
            json!({"tool_name": "svc.echo", "arguments": "value=hi"}),
        ];
        for case in cases {
            let err = ToolCall::from_json(&case).unwrap_err();
            assert!(err.is_malformed_directive(), "{case} should be malformed");
        }
    }

    #[test]
    fn test_numeric_accessors() {
        let call = ToolCall::new("gym.log_exercise")
            .with_arg("sets", 3)
            .with_arg("weight_kg", 62.5);

        assert_eq!(call.get_i64("sets"), Some(3));
        assert_eq!(call.get_f64("sets"), Some(3.0));
        assert_eq!(call.get_f64("weight_kg"), Some(62.5));
        assert_eq!(call.get_i64("weight_kg"), None);
    }
}
