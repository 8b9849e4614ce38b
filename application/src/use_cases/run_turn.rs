//! Run Turn use case.
//!
//! Drives one conversational turn of a tool-augmented session:
//!
//! 1. **Discovering**: search the catalog with the raw utterance
//! 2. **Composing**: build the system message from the discovered tools
//! 3. **QueryingModel**: send `[system, ...history, user]`
//! 4. **Interpreting**: look for a `{tool_name, arguments}` directive
//! 5. **ExecutingTool**: invoke the tool (failures become tool output)
//! 6. **ReQueryingModel**: send the tool output back as a synthetic user message
//! 7. **Emitting**: commit the turn to history and return the answer
//!
//! A turn appends exactly `[user, assistant]` when answered directly, and
//! exactly `[user, assistant(directive), assistant(final)]` when a tool was
//! used. The synthetic "Tool output" message is never stored.
//!
//! Messages are staged locally and committed only when the turn completes,
//! so the history only ever holds completed turns.

use crate::config::ExecutionParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoTurnProgress, TurnProgressNotifier};
use crate::ports::tool_catalog::{CatalogError, ToolCatalogPort};
use crate::use_cases::shared::{check_cancelled, run_cancellable};
use relay_domain::util::preview;
use relay_domain::{
    ConversationHistory, Message, PromptComposer, TurnOutcome, TurnPhase, interpret,
};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Turn-fatal errors.
///
/// Tool execution failures and malformed directives are not here: they are
/// absorbed into the conversation.
#[derive(Error, Debug)]
pub enum TurnError {
    #[error("Tool discovery failed: {0}")]
    Discovery(#[from] CatalogError),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(#[from] GatewayError),

    #[error("Failed to serialize tool result: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Turn cancelled")]
    Cancelled,
}

impl TurnError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, TurnError::Cancelled)
    }

    /// Short category name for logs
    pub fn category(&self) -> &'static str {
        match self {
            TurnError::Discovery(_) => "discovery",
            TurnError::ModelUnavailable(_) => "model_unavailable",
            TurnError::Serialization(_) => "serialization",
            TurnError::Cancelled => "cancelled",
        }
    }
}

/// Use case for running conversational turns against one session.
///
/// Owns the session's [`ConversationHistory`]. Collaborators are injected
/// once per session; `execute` takes `&mut self`, so turns are strictly
/// sequential and this use case is the history's only writer.
pub struct RunTurnUseCase {
    catalog: Arc<dyn ToolCatalogPort>,
    gateway: Arc<dyn LlmGateway>,
    params: ExecutionParams,
    history: ConversationHistory,
    conversation_logger: Arc<dyn ConversationLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl RunTurnUseCase {
    pub fn new(catalog: Arc<dyn ToolCatalogPort>, gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            catalog,
            gateway,
            params: ExecutionParams::default(),
            history: ConversationHistory::new(),
            conversation_logger: Arc::new(NoConversationLogger),
            cancellation_token: None,
        }
    }

    pub fn with_params(mut self, params: ExecutionParams) -> Self {
        self.params = params;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Set a cancellation token for graceful interruption
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Replace the cancellation token (e.g. a fresh one per turn).
    pub fn set_cancellation(&mut self, token: Option<CancellationToken>) {
        self.cancellation_token = token;
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn params(&self) -> &ExecutionParams {
        &self.params
    }

    /// Run one turn and return the answer text.
    ///
    /// A turn-fatal error is returned as its description, so callers can
    /// show it and keep accepting input.
    pub async fn turn(&mut self, user_text: &str) -> String {
        match self.execute(user_text, &NoTurnProgress).await {
            Ok(outcome) => outcome.answer,
            Err(e) => e.to_string(),
        }
    }

    /// Run one turn with progress callbacks.
    pub async fn execute(
        &mut self,
        user_text: &str,
        progress: &dyn TurnProgressNotifier,
    ) -> Result<TurnOutcome, TurnError> {
        info!("Starting turn: {}", preview(user_text, 100));
        self.conversation_logger.log(ConversationEvent::new(
            "turn_started",
            serde_json::json!({
                "user": user_text,
                "history_len": self.history.len(),
            }),
        ));

        let result = self.run_turn(user_text, progress).await;

        match &result {
            Ok(outcome) => {
                info!(
                    "Turn completed (tool used: {}, history: {} messages)",
                    outcome.used_tool(),
                    self.history.len()
                );
                self.conversation_logger.log(ConversationEvent::new(
                    "turn_completed",
                    serde_json::json!({
                        "answer": outcome.answer,
                        "tool": outcome.tool_call.as_ref().map(|c| c.tool_name.as_str()),
                        "history_len": self.history.len(),
                    }),
                ));
            }
            Err(e) => {
                warn!("Turn failed: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "turn_failed",
                    serde_json::json!({
                        "category": e.category(),
                        "error": e.to_string(),
                    }),
                ));
            }
        }

        progress.on_phase(TurnPhase::AwaitingInput);
        result
    }

    async fn run_turn(
        &mut self,
        user_text: &str,
        progress: &dyn TurnProgressNotifier,
    ) -> Result<TurnOutcome, TurnError> {
        self.enter(TurnPhase::Discovering, progress)?;
        let tools = run_cancellable(
            &self.cancellation_token,
            self.catalog.search(user_text, self.params.search_limit),
        )
        .await??;

        debug!("Discovered {} tools", tools.len());
        progress.on_tools_discovered(&tools);
        self.conversation_logger.log(ConversationEvent::new(
            "tools_discovered",
            serde_json::json!({
                "tools": tools.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            }),
        ));

        self.enter(TurnPhase::Composing, progress)?;
        let system = Message::system(PromptComposer::compose(&tools));

        self.enter(TurnPhase::QueryingModel, progress)?;
        let mut staged = vec![Message::user(user_text)];
        let assistant_text = self.query_model(&system, &staged).await?;

        self.enter(TurnPhase::Interpreting, progress)?;
        // With nothing discovered there is nothing to invoke.
        let directive = if tools.is_empty() {
            None
        } else {
            interpret(&assistant_text)
        };
        staged.push(Message::assistant(assistant_text.clone()));

        let Some(call) = directive else {
            self.enter(TurnPhase::Emitting, progress)?;
            self.history.commit(staged);
            return Ok(TurnOutcome::plain(assistant_text, tools.len()));
        };

        self.enter(TurnPhase::ExecutingTool, progress)?;
        info!("Executing tool call: {}", call.tool_name);
        progress.on_tool_call(&call);
        self.conversation_logger.log(ConversationEvent::new(
            "tool_call",
            serde_json::json!({
                "tool": call.tool_name,
                "arguments": call.arguments,
            }),
        ));

        let started = Instant::now();
        let mut result =
            run_cancellable(&self.cancellation_token, self.catalog.invoke(&call)).await?;
        if result.metadata.duration_ms.is_none() {
            result = result.with_duration(started.elapsed().as_millis() as u64);
        }
        if let Some(error) = result.error() {
            warn!("Tool '{}' failed: {}", call.tool_name, error);
        }
        progress.on_tool_result(&result);

        let tool_output = result.to_tool_output()?;
        self.conversation_logger.log(ConversationEvent::new(
            "tool_result",
            serde_json::json!({
                "tool": call.tool_name,
                "ok": result.is_success(),
                "output": tool_output,
                "duration_ms": result.metadata.duration_ms,
            }),
        ));

        self.enter(TurnPhase::ReQueryingModel, progress)?;
        let mut follow_up = staged.clone();
        follow_up.push(Message::user(PromptComposer::tool_output(&tool_output)));
        let final_text = self.query_model(&system, &follow_up).await?;

        self.enter(TurnPhase::Emitting, progress)?;
        staged.push(Message::assistant(final_text.clone()));
        self.history.commit(staged);

        Ok(TurnOutcome::with_tool(final_text, tools.len(), call, result))
    }

    /// Enter a phase: honor cancellation, then report it.
    fn enter(
        &self,
        phase: TurnPhase,
        progress: &dyn TurnProgressNotifier,
    ) -> Result<(), TurnError> {
        check_cancelled(&self.cancellation_token)?;
        debug!("Turn phase: {}", phase.as_str());
        progress.on_phase(phase);
        Ok(())
    }

    /// Query the model with `[system, ...history, ...tail]`.
    ///
    /// Empty or whitespace-only replies count as the model being unavailable.
    async fn query_model(&self, system: &Message, tail: &[Message]) -> Result<String, TurnError> {
        let messages = self.history.query_with(system.clone(), tail);
        debug!(
            "Sending {} messages to {}",
            messages.len(),
            self.gateway.model_name()
        );

        let text =
            run_cancellable(&self.cancellation_token, self.gateway.complete(&messages)).await??;
        if text.trim().is_empty() {
            return Err(TurnError::ModelUnavailable(GatewayError::EmptyResponse));
        }
        debug!("Model replied: {}", preview(&text, 120));

        self.conversation_logger.log(ConversationEvent::new(
            "model_reply",
            serde_json::json!({
                "model": self.gateway.model_name(),
                "bytes": text.len(),
                "text": text,
            }),
        ));

        Ok(text)
    }
}
