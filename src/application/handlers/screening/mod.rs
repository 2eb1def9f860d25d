//! Screening handlers.
//!
//! - `ConversationController` - Per-turn state machine driver
//! - `QuestionGenerator` - Tech-stack driven technical questions

mod generate_questions;
mod handle_turn;
mod settings;

pub use generate_questions::{QuestionGenerationError, QuestionGenerator};
pub use handle_turn::ConversationController;
pub use settings::CompletionSettings;
