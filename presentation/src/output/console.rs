//! Console output formatter for turns, tools and transcripts

use colored::Colorize;
use relay_domain::{Message, Role, ToolCall, ToolDescriptor, ToolResult, TurnOutcome};

/// Formats relay output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the answer of a completed turn
    pub fn format_answer(outcome: &TurnOutcome) -> String {
        format!("{} {}", "Assistant:".green().bold(), outcome.answer)
    }

    /// Format the discovery line shown before the model is queried
    pub fn format_discovery(tools: &[ToolDescriptor]) -> String {
        if tools.is_empty() {
            return format!("{}", "No relevant tools found.".dimmed());
        }

        let names = tools
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} {}",
            format!("Found {} relevant tools:", tools.len()).cyan(),
            names
        )
    }

    /// Format a tool listing with descriptions (for `/tools`)
    pub fn format_tools(tools: &[ToolDescriptor]) -> String {
        if tools.is_empty() {
            return "No matching tools.".to_string();
        }

        let width = tools.iter().map(|t| t.name.len()).max().unwrap_or(0);
        tools
            .iter()
            .map(|t| format!("  {:<width$}  {}", t.name.bold(), t.description.dimmed()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format the tool about to be executed, with pretty-printed arguments
    pub fn format_tool_call(call: &ToolCall) -> String {
        let args = serde_json::to_string_pretty(&call.arguments)
            .unwrap_or_else(|_| "{}".to_string());
        format!(
            "{} {}\n{}",
            "Executing tool:".yellow().bold(),
            call.tool_name,
            Self::indent(&args, "  ")
        )
    }

    /// Format the result of a tool execution
    pub fn format_tool_result(result: &ToolResult) -> String {
        match (result.value(), result.error()) {
            (Some(value), _) => {
                let pretty =
                    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
                format!(
                    "{} {}\n{}",
                    "Tool result:".green().bold(),
                    Self::duration_suffix(result),
                    Self::indent(&pretty, "  ")
                )
            }
            (None, Some(error)) => format!(
                "{} {} {}",
                "Tool failed:".red().bold(),
                error,
                Self::duration_suffix(result)
            ),
            (None, None) => format!("{}", "Tool returned nothing.".dimmed()),
        }
    }

    /// Format the stored transcript (for `/history`)
    pub fn format_history(messages: &[Message]) -> String {
        if messages.is_empty() {
            return "History is empty.".to_string();
        }

        messages
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let role = match m.role {
                    Role::User => "user".cyan().bold(),
                    Role::Assistant => "assistant".green().bold(),
                    Role::System => "system".dimmed(),
                };
                format!("{:>3}. {}: {}", i + 1, role, m.content)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn duration_suffix(result: &ToolResult) -> String {
        match result.metadata.duration_ms {
            Some(ms) => format!("({} ms)", ms).dimmed().to_string(),
            None => String::new(),
        }
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_domain::ToolError;
    use serde_json::json;

    fn plain(s: String) -> String {
        // Strip ANSI codes so assertions don't depend on the terminal
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_format_answer() {
        let outcome = TurnOutcome::plain("Today is Chest Day.", 2);
        assert_eq!(
            plain(ConsoleFormatter::format_answer(&outcome)),
            "Assistant: Today is Chest Day."
        );
    }

    #[test]
    fn test_format_discovery() {
        assert_eq!(
            plain(ConsoleFormatter::format_discovery(&[])),
            "No relevant tools found."
        );

        let tools = vec![
            ToolDescriptor::new("demo.echo", "Echo", json!({})),
            ToolDescriptor::new("gym.log_exercise", "Log", json!({})),
        ];
        assert_eq!(
            plain(ConsoleFormatter::format_discovery(&tools)),
            "Found 2 relevant tools: demo.echo, gym.log_exercise"
        );
    }

    #[test]
    fn test_format_tool_call_pretty_prints_arguments() {
        let call = ToolCall::new("demo.echo").with_arg("value", "hi");
        let text = plain(ConsoleFormatter::format_tool_call(&call));
        assert!(text.starts_with("Executing tool: demo.echo\n"));
        assert!(text.contains("    \"value\": \"hi\""));
    }

    #[test]
    fn test_format_tool_result() {
        let ok = ToolResult::success("demo.echo", json!({"received": "hi"})).with_duration(3);
        let text = plain(ConsoleFormatter::format_tool_result(&ok));
        assert!(text.starts_with("Tool result: (3 ms)"));
        assert!(text.contains("\"received\": \"hi\""));

        let failed = ToolResult::failure("demo.echo", ToolError::timeout("timeout"));
        let text = plain(ConsoleFormatter::format_tool_result(&failed));
        assert!(text.contains("Tool failed: [TIMEOUT] timeout"));
    }

    #[test]
    fn test_format_history() {
        assert_eq!(ConsoleFormatter::format_history(&[]), "History is empty.");

        let messages = vec![Message::user("hi"), Message::assistant("hello")];
        let text = plain(ConsoleFormatter::format_history(&messages));
        assert_eq!(text, "  1. user: hi\n  2. assistant: hello");
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
