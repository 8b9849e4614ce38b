//! Infrastructure layer for tool-relay
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the OpenAI-compatible gateway, the builtin
//! tool catalog, the JSONL conversation logger, and configuration file
//! loading.

pub mod catalog;
pub mod config;
pub mod gateway;
pub mod logging;

// Re-export commonly used types
pub use catalog::BuiltinToolCatalog;
pub use config::{
    ConfigLoader, ConfigValidationError, FileCatalogConfig, FileConfig, FileGatewayConfig,
    FileLoggingConfig, FileReplConfig,
};
pub use gateway::{GatewaySettings, OpenAiCompatibleGateway};
pub use logging::JsonlConversationLogger;
