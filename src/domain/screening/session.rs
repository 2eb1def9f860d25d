//! Per-session context for one candidate conversation.

use crate::domain::foundation::{SessionId, StateMachine, ValidationError};

use super::field::{CandidateField, CollectedData};
use super::questions::QuestionQueue;
use super::state::ConversationState;
use super::transcript::Transcript;

/// Everything one screening conversation owns.
///
/// A session is created fresh for each candidate, handed to the controller
/// for every turn and handed back afterwards. Nothing is shared between
/// sessions.
#[derive(Debug, Clone, Default)]
pub struct ScreeningSession {
    id: SessionId,
    state: ConversationState,
    collected: CollectedData,
    transcript: Transcript,
    questions: QuestionQueue,
    closed: bool,
}

impl ScreeningSession {
    /// Starts a new session in the greeting state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn collected(&self) -> &CollectedData {
        &self.collected
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn questions(&self) -> &QuestionQueue {
        &self.questions
    }

    /// True once a closing message has been delivered.
    ///
    /// Reaching `Ended` is not enough: the last technical question moves the
    /// session to `Ended` while the candidate still has to answer it.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The field the candidate is currently being asked for.
    pub fn pending_field(&self) -> Option<CandidateField> {
        self.collected.next_unset()
    }

    /// Moves to `target` if the state machine allows it.
    pub fn transition_to(&mut self, target: ConversationState) -> Result<(), ValidationError> {
        self.state = self.state.transition_to(target)?;
        Ok(())
    }

    /// Stores a field value; a field that is already set is left alone.
    pub fn record_field(&mut self, field: CandidateField, value: impl Into<String>) -> bool {
        self.collected.record(field, value)
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.transcript.push_assistant(content);
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.transcript.push_user(content);
    }

    /// Appends the closing message and marks the session closed.
    pub fn push_closing(&mut self, content: impl Into<String>) {
        self.transcript.push_assistant(content);
        self.closed = true;
    }

    /// Loads the technical questions. Only the first call has any effect.
    pub fn load_questions(&mut self, questions: Vec<String>) -> bool {
        self.questions.load(questions)
    }

    /// Hands out the next technical question, advancing the cursor.
    pub fn next_question(&mut self) -> Option<String> {
        self.questions.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_in_greeting_with_nothing_collected() {
        let session = ScreeningSession::new();
        assert_eq!(session.state(), ConversationState::Greeting);
        assert!(session.transcript().is_empty());
        assert_eq!(session.pending_field(), Some(CandidateField::FullName));
        assert_eq!(session.questions().cursor(), None);
        assert!(!session.is_closed());
    }

    #[test]
    fn sessions_get_distinct_ids() {
        assert_ne!(ScreeningSession::new().id(), ScreeningSession::new().id());
    }

    #[test]
    fn invalid_transition_leaves_state_unchanged() {
        let mut session = ScreeningSession::new();
        assert!(session
            .transition_to(ConversationState::TechnicalScreening)
            .is_err());
        assert_eq!(session.state(), ConversationState::Greeting);
    }

    #[test]
    fn record_field_is_first_write_wins() {
        let mut session = ScreeningSession::new();
        assert!(session.record_field(CandidateField::FullName, "Jane"));
        assert!(!session.record_field(CandidateField::FullName, "Joan"));
        assert_eq!(session.collected().get(CandidateField::FullName), Some("Jane"));
        assert_eq!(session.pending_field(), Some(CandidateField::Email));
    }

    #[test]
    fn push_closing_marks_session_closed() {
        let mut session = ScreeningSession::new();
        session.push_assistant("Hello");
        assert!(!session.is_closed());

        session.push_closing("Goodbye");
        assert!(session.is_closed());
        assert_eq!(session.transcript().assistant_messages().last(), Some("Goodbye"));
    }
}
