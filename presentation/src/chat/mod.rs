//! Interactive chat module
//!
//! Provides a line-editor based chat interface over one relay session.

mod repl;

pub use repl::ChatRepl;
