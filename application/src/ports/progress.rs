//! Progress notification port
//!
//! Defines the interface for reporting progress during a conversational turn.

use relay_domain::{ToolCall, ToolDescriptor, ToolResult, TurnPhase};

/// Callback for progress updates during a turn
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, spinner, etc.). All methods default
/// to no-ops.
pub trait TurnProgressNotifier: Send + Sync {
    /// Called when the turn enters a phase
    fn on_phase(&self, _phase: TurnPhase) {}

    /// Called with the tools the catalog returned for the utterance
    fn on_tools_discovered(&self, _tools: &[ToolDescriptor]) {}

    /// Called right before a tool is invoked
    fn on_tool_call(&self, _call: &ToolCall) {}

    /// Called with the tool's result (success or failure)
    fn on_tool_result(&self, _result: &ToolResult) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoTurnProgress;

impl TurnProgressNotifier for NoTurnProgress {}
