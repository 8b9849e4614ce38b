//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::config::ReplConfig;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use relay_application::{RunTurnUseCase, ToolCatalogPort, TurnError, TurnProgressNotifier};
use relay_domain::TurnOutcome;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// Interactive chat REPL over one relay session
pub struct ChatRepl {
    use_case: RunTurnUseCase,
    catalog: Arc<dyn ToolCatalogPort>,
    model_name: String,
    config: ReplConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl
    ///
    /// `catalog` is the same catalog the use case searches; it backs `/tools`.
    pub fn new(
        use_case: RunTurnUseCase,
        catalog: Arc<dyn ToolCatalogPort>,
        model_name: impl Into<String>,
    ) -> Self {
        Self {
            use_case,
            catalog,
            model_name: model_name.into(),
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.config.show_progress = show;
        self
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();

        let Some(path) = &self.config.history_file else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                editor
            }
        }
    }

    /// Run the interactive REPL until the user quits
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("relay".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if is_exit_sentinel(line) {
                        println!("Bye!");
                        break;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    let _ = self.process_prompt(line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Run a single turn and print its result (one-shot mode)
    pub async fn run_once(&mut self, prompt: &str) -> Result<TurnOutcome, TurnError> {
        self.process_prompt(prompt).await
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│             Tool Relay - Chat Mode          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.model_name);
        println!();
        Self::print_help();
        println!("Type 'exit' or 'quit' to leave. Ctrl+C cancels a running turn.");
        println!();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /tools [query]    - List tools matching a query");
        println!("  /history          - Show the conversation so far");
        println!("  /quit, /exit, /q  - Exit chat");
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&self, line: &str) -> bool {
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                Self::print_help();
                println!();
                false
            }
            "/tools" => {
                let limit = self.use_case.params().search_limit;
                match self.catalog.search(rest.trim(), limit).await {
                    Ok(tools) => println!("{}", ConsoleFormatter::format_tools(&tools)),
                    Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
                }
                false
            }
            "/history" => {
                println!(
                    "{}",
                    ConsoleFormatter::format_history(self.use_case.history().messages())
                );
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    /// Run one turn with Ctrl+C wired to the turn's cancellation token.
    async fn process_prompt(&mut self, prompt: &str) -> Result<TurnOutcome, TurnError> {
        println!();

        let token = CancellationToken::new();
        self.use_case.set_cancellation(Some(token.clone()));
        let interrupt = tokio::spawn({
            let token = token.clone();
            async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    token.cancel();
                }
            }
        });

        let progress: Box<dyn TurnProgressNotifier> = if self.config.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        };
        let result = self.use_case.execute(prompt, progress.as_ref()).await;

        interrupt.abort();
        self.use_case.set_cancellation(None);

        match &result {
            Ok(outcome) => println!("{}", ConsoleFormatter::format_answer(outcome)),
            Err(e) if e.is_cancelled() => println!("{}", "Turn cancelled.".yellow()),
            Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
        }
        println!();

        result
    }
}

/// Bare `exit` / `quit` (any case) end the session
fn is_exit_sentinel(line: &str) -> bool {
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use relay_application::{CatalogError, GatewayError, LlmGateway};
    use relay_domain::{Message, ToolCall, ToolDescriptor, ToolResult};
    use std::sync::Mutex;

    struct FixedGateway(Mutex<Vec<String>>);

    #[async_trait]
    impl LlmGateway for FixedGateway {
        fn model_name(&self) -> &str {
            "fixed"
        }

        async fn complete(&self, _messages: &[Message]) -> Result<String, GatewayError> {
            self.0
                .lock()
                .unwrap()
                .pop()
                .ok_or(GatewayError::EmptyResponse)
        }
    }

    struct EmptyCatalog;

    #[async_trait]
    impl ToolCatalogPort for EmptyCatalog {
        async fn search(&self, _q: &str, _l: usize) -> Result<Vec<ToolDescriptor>, CatalogError> {
            Ok(Vec::new())
        }

        async fn invoke(&self, call: &ToolCall) -> ToolResult {
            ToolResult::success(&call.tool_name, serde_json::Value::Null)
        }
    }

    fn repl(replies: &[&str]) -> ChatRepl {
        let catalog: Arc<dyn ToolCatalogPort> = Arc::new(EmptyCatalog);
        let gateway = Arc::new(FixedGateway(Mutex::new(
            replies.iter().rev().map(|r| r.to_string()).collect(),
        )));
        let use_case = RunTurnUseCase::new(catalog.clone(), gateway);
        ChatRepl::new(use_case, catalog, "fixed").with_progress(false)
    }

    #[test]
    fn test_exit_sentinels() {
        assert!(is_exit_sentinel("exit"));
        assert!(is_exit_sentinel("QUIT"));
        assert!(is_exit_sentinel("Exit"));
        assert!(!is_exit_sentinel("exit now"));
        assert!(!is_exit_sentinel("/quit"));
    }

    #[tokio::test]
    async fn test_handle_command() {
        let repl = repl(&[]);
        assert!(repl.handle_command("/quit").await);
        assert!(repl.handle_command("/q").await);
        assert!(!repl.handle_command("/help").await);
        assert!(!repl.handle_command("/tools gym").await);
        assert!(!repl.handle_command("/history").await);
        assert!(!repl.handle_command("/unknown").await);
    }

    #[tokio::test]
    async fn test_run_once_keeps_history() {
        let mut repl = repl(&["first", "second"]);

        let outcome = repl.run_once("hello").await.unwrap();
        assert_eq!(outcome.answer, "first");
        repl.run_once("again").await.unwrap();

        assert_eq!(repl.use_case.history().len(), 4);
    }
}
