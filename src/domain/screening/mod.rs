//! Screening domain module.
//!
//! Candidate intake vocabulary: the conversation state machine, the
//! profile fields and their validation rules, the transcript, and the
//! technical question queue.

mod field;
mod prompts;
mod questions;
mod session;
mod state;
mod transcript;
pub mod validator;

pub use field::{CandidateField, CollectedData};
pub use prompts::{
    acknowledgement, is_exit_request, tech_stack_message, CLOSING_SYSTEM_PROMPT, EXIT_KEYWORDS,
    GREETING_SYSTEM_PROMPT, QUESTION_GENERATION_SYSTEM_PROMPT, SCREENING_TRANSITION_MESSAGE,
    SERVICE_FALLBACK_MESSAGE,
};
pub use questions::{
    fallback_questions, parse_question_list, QuestionParseError, QuestionQueue,
    FALLBACK_QUESTION_COUNT,
};
pub use session::ScreeningSession;
pub use state::ConversationState;
pub use transcript::{Transcript, Turn, TurnRole};
pub use validator::{check_field, validate, validate_field};
