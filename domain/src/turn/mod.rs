//! Turn domain: phases and outcome of one conversational turn.
//!
//! ```text
//! AwaitingInput → Discovering → Composing → QueryingModel → Interpreting
//!                                                              │
//!                     ┌────────────── directive ───────────────┤
//!                     ▼                                        │ plain reply
//!               ExecutingTool → ReQueryingModel → Emitting ◀───┘
//!                                                    │
//!                                                    ▼
//!                                              AwaitingInput
//! ```

use crate::tool::entities::ToolCall;
use crate::tool::value_objects::ToolResult;
use serde::{Deserialize, Serialize};

/// Phase of a conversational turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    /// Idle between turns
    AwaitingInput,
    /// Searching the catalog for tools relevant to the utterance
    Discovering,
    /// Building the system message from the discovered tools
    Composing,
    /// First model query
    QueryingModel,
    /// Looking for a tool directive in the model reply
    Interpreting,
    /// Invoking the requested tool
    ExecutingTool,
    /// Follow-up model query carrying the tool output
    ReQueryingModel,
    /// Answer is final and the turn is committed to history
    Emitting,
}

impl TurnPhase {
    pub fn as_str(&self) -> &str {
        match self {
            TurnPhase::AwaitingInput => "awaiting_input",
            TurnPhase::Discovering => "discovering",
            TurnPhase::Composing => "composing",
            TurnPhase::QueryingModel => "querying_model",
            TurnPhase::Interpreting => "interpreting",
            TurnPhase::ExecutingTool => "executing_tool",
            TurnPhase::ReQueryingModel => "re_querying_model",
            TurnPhase::Emitting => "emitting",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            TurnPhase::AwaitingInput => "Awaiting input",
            TurnPhase::Discovering => "Searching for relevant tools",
            TurnPhase::Composing => "Composing prompt",
            TurnPhase::QueryingModel => "Querying model",
            TurnPhase::Interpreting => "Interpreting reply",
            TurnPhase::ExecutingTool => "Executing tool",
            TurnPhase::ReQueryingModel => "Sending tool results to model",
            TurnPhase::Emitting => "Answering",
        }
    }

    /// Whether this phase waits on an external collaborator
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            TurnPhase::Discovering
                | TurnPhase::QueryingModel
                | TurnPhase::ExecutingTool
                | TurnPhase::ReQueryingModel
        )
    }
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Result of a completed turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The turn's answer text
    pub answer: String,
    /// Number of tool descriptors the catalog returned
    pub tools_discovered: usize,
    /// The directive the model issued, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call: Option<ToolCall>,
    /// Result of executing that directive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_result: Option<ToolResult>,
}

impl TurnOutcome {
    /// Outcome of a turn answered without a tool
    pub fn plain(answer: impl Into<String>, tools_discovered: usize) -> Self {
        Self {
            answer: answer.into(),
            tools_discovered,
            tool_call: None,
            tool_result: None,
        }
    }

    /// Outcome of a turn that invoked a tool
    pub fn with_tool(
        answer: impl Into<String>,
        tools_discovered: usize,
        call: ToolCall,
        result: ToolResult,
    ) -> Self {
        Self {
            answer: answer.into(),
            tools_discovered,
            tool_call: Some(call),
            tool_result: Some(result),
        }
    }

    pub fn used_tool(&self) -> bool {
        self.tool_call.is_some()
    }
}
