//! Progress reporting for conversational turns

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use relay_application::ports::progress::TurnProgressNotifier;
use relay_domain::{ToolCall, ToolDescriptor, ToolResult, TurnPhase};
use std::sync::Mutex;
use std::time::Duration;

/// Reports turn progress with a spinner while waiting on the model or a tool
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn clear_spinner(&self) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
    }

    /// Print a line without tearing the spinner
    fn println(&self, line: String) {
        match self.spinner.lock() {
            Ok(guard) if guard.is_some() => {
                if let Some(pb) = guard.as_ref() {
                    pb.suspend(|| println!("{}", line));
                }
            }
            _ => println!("{}", line),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnProgressNotifier for ProgressReporter {
    fn on_phase(&self, phase: TurnPhase) {
        self.clear_spinner();
        if !phase.is_remote() {
            return;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("{}...", phase.display_name().cyan()));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }

    fn on_tools_discovered(&self, tools: &[ToolDescriptor]) {
        self.println(ConsoleFormatter::format_discovery(tools));
    }

    fn on_tool_call(&self, call: &ToolCall) {
        self.println(ConsoleFormatter::format_tool_call(call));
    }

    fn on_tool_result(&self, result: &ToolResult) {
        self.println(ConsoleFormatter::format_tool_result(result));
    }
}

/// Simple text-based progress (no spinners)
///
/// Prints discovered tools and tool activity only.
pub struct SimpleProgress;

impl TurnProgressNotifier for SimpleProgress {
    fn on_tools_discovered(&self, tools: &[ToolDescriptor]) {
        println!("{}", ConsoleFormatter::format_discovery(tools));
    }

    fn on_tool_call(&self, call: &ToolCall) {
        println!("{}", ConsoleFormatter::format_tool_call(call));
    }

    fn on_tool_result(&self, result: &ToolResult) {
        println!("{}", ConsoleFormatter::format_tool_result(result));
    }
}
