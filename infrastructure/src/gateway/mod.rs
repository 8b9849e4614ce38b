//! LLM gateway adapters
//!
//! [`OpenAiCompatibleGateway`] talks to any server implementing the
//! OpenAI chat-completions API (OpenAI itself, Azure-style proxies,
//! Ollama, vLLM, LM Studio, ...).

mod openai;
mod types;

pub use openai::{GatewaySettings, OpenAiCompatibleGateway};
