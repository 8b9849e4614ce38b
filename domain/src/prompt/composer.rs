//! System prompt composition for the tool directive protocol

use crate::tool::entities::ToolDescriptor;

/// Builds the instructions that teach a text-only model the directive grammar
pub struct PromptComposer;

impl PromptComposer {
    /// Build the system message for one turn.
    ///
    /// With tools available, the instruction requires a bare
    /// `{"tool_name", "arguments"}` JSON reply when a tool is needed and
    /// embeds the descriptors verbatim. With no tools, it tells the model to
    /// answer in natural language. Descriptors are not validated here.
    pub fn compose(tools: &[ToolDescriptor]) -> String {
        if tools.is_empty() {
            return Self::no_tools_system().to_string();
        }

        let tools_json =
            serde_json::to_string_pretty(tools).unwrap_or_else(|_| "[]".to_string());

        format!(
            r#"You are a helpful assistant with access to external tools.

When you need to use a tool, you MUST respond with ONLY a JSON object with "tool_name" and "arguments" keys. Do not add any other text. The "arguments" value must be a JSON object matching the tool's "input_schema".
For example: {{"tool_name": "some_provider.some_tool", "arguments": {{"arg1": "value1"}}}}

If no tool is needed, reply to the user in natural language.

Here are the available tools:
{}"#,
            tools_json
        )
    }

    /// System prompt used when the catalog returned nothing for the query
    pub fn no_tools_system() -> &'static str {
        r#"You are a helpful assistant.
No tools are available for this request. Do not reply with a tool call; answer the user in natural language."#
    }

    /// Synthetic user message carrying a tool's output into the follow-up query
    pub fn tool_output(output: &str) -> String {
        format!(
            "Tool output: {}\nPlease use the tool output to answer the user's request.",
            output
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn echo_tool() -> ToolDescriptor {
        ToolDescriptor::new(
            "demo.echo",
            "Echo a value back",
            json!({
                "type": "object",
                "properties": {"value": {"type": "string"}},
                "required": ["value"]
            }),
        )
    }

    #[test]
    fn test_compose_embeds_directive_grammar_and_tools() {
        let prompt = PromptComposer::compose(&[echo_tool()]);

        assert!(prompt.contains(r#""tool_name""#));
        assert!(prompt.contains(r#""arguments""#));
        assert!(prompt.contains("Do not add any other text"));
        assert!(prompt.contains(r#""name": "demo.echo""#));
        assert!(prompt.contains(r#""input_schema""#));
        assert!(prompt.contains(r#""required": ["#));
    }

    #[test]
    fn test_compose_embeds_descriptors_verbatim() {
        let tools = vec![echo_tool()];
        let prompt = PromptComposer::compose(&tools);
        let expected = serde_json::to_string_pretty(&tools).unwrap();
        assert!(prompt.ends_with(&expected));
    }

    #[test]
    fn test_compose_passes_malformed_descriptors_through() {
        let odd = ToolDescriptor::new("no-namespace", "", json!("not a schema"));
        let prompt = PromptComposer::compose(&[odd]);
        assert!(prompt.contains("no-namespace"));
        assert!(prompt.contains(r#""not a schema""#));
    }

    #[test]
    fn test_compose_without_tools_states_fallback() {
        let prompt = PromptComposer::compose(&[]);
        assert_eq!(prompt, PromptComposer::no_tools_system());
        assert!(prompt.contains("No tools are available"));
        assert!(prompt.contains("natural language"));
    }

    #[test]
    fn test_tool_output_message() {
        let message = PromptComposer::tool_output(r#"{"received":"hi"}"#);
        assert!(message.starts_with(r#"Tool output: {"received":"hi"}"#));
    }
}
