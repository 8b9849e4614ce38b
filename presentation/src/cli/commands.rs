//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for tool-relay
#[derive(Parser, Debug)]
#[command(name = "tool-relay")]
#[command(author, version, about = "Chat with a language model that can discover and call tools")]
#[command(long_about = r#"
Tool Relay lets a text-only language model use tools.

Each turn goes through these steps:
1. Discovery: the tool catalog is searched with your message
2. Query: the model sees the matching tools and either answers directly
   or replies with a JSON tool call
3. Execution: the requested tool runs and its output is sent back to
   the model, which writes the final answer

Configuration files are loaded from (in priority order):
1. RELAY_* environment variables (e.g. RELAY_GATEWAY__MODEL)
2. --config <path>     Explicit config file
3. ./relay.toml        Project-level config
4. ~/.config/tool-relay/config.toml   Global config

Example:
  tool-relay "What is my workout for today?"
  tool-relay --model gpt-4o "Echo hello back to me"
  tool-relay --base-url http://localhost:11434/v1 --model llama3.1
"#)]
pub struct Cli {
    /// Run a single turn with this prompt (starts the chat REPL if omitted)
    pub prompt: Option<String>,

    /// Model name sent to the chat-completions endpoint
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Maximum number of tools offered to the model per turn
    #[arg(long, value_name = "N")]
    pub search_limit: Option<usize>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Write operation logs to daily rolling files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_one_shot_with_overrides() {
        let cli = Cli::parse_from([
            "tool-relay",
            "-vv",
            "--model",
            "gpt-4o",
            "--search-limit",
            "3",
            "echo hi",
        ]);
        assert_eq!(cli.prompt.as_deref(), Some("echo hi"));
        assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
        assert_eq!(cli.search_limit, Some(3));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_repl_mode() {
        let cli = Cli::parse_from(["tool-relay", "--no-config", "-q"]);
        assert!(cli.prompt.is_none());
        assert!(cli.no_config);
        assert!(cli.quiet);
    }
}
