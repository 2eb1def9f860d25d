//! Application handlers.
//!
//! Handlers that orchestrate domain operations against the ports.

pub mod screening;

pub use screening::{
    CompletionSettings, ConversationController, QuestionGenerationError, QuestionGenerator,
};
