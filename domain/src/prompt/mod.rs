//! Prompt domain
//!
//! Builds the per-turn system instruction and the follow-up message that
//! carries tool output back to the model.

mod composer;

pub use composer::PromptComposer;
