//! Conversation controller for candidate screening.
//!
//! Drives one `ScreeningSession` through greeting, profile collection,
//! technical questions and closing. Each call to [`ConversationController::handle_turn`]
//! processes exactly one candidate turn, appends zero or more turns to the
//! transcript, and hands the session back.
//!
//! Completion service failures never escape a turn: the affected message is
//! replaced with a fixed apology and the state machine moves exactly as it
//! would have on success.

use std::sync::Arc;

use super::generate_questions::QuestionGenerator;
use super::settings::CompletionSettings;
use crate::domain::screening::{
    acknowledgement, check_field, is_exit_request, CandidateField, ConversationState,
    ScreeningSession, CLOSING_SYSTEM_PROMPT, GREETING_SYSTEM_PROMPT,
    SCREENING_TRANSITION_MESSAGE, SERVICE_FALLBACK_MESSAGE,
};
use crate::ports::{
    AIProvider, CompletionPurpose, CompletionRequest, MessageRole, RequestMetadata,
};

/// Finite-state controller for screening conversations.
pub struct ConversationController<A>
where
    A: AIProvider,
{
    ai_provider: Arc<A>,
    question_generator: QuestionGenerator<A>,
    settings: CompletionSettings,
}

impl<A> ConversationController<A>
where
    A: AIProvider,
{
    /// Creates a controller with default completion settings.
    pub fn new(ai_provider: Arc<A>) -> Self {
        Self {
            question_generator: QuestionGenerator::new(Arc::clone(&ai_provider)),
            ai_provider,
            settings: CompletionSettings::default(),
        }
    }

    /// Overrides the completion settings for every request this controller makes.
    pub fn with_settings(mut self, settings: CompletionSettings) -> Self {
        self.question_generator = self.question_generator.with_settings(settings);
        self.settings = settings;
        self
    }

    /// Processes one candidate turn.
    ///
    /// `input` may be empty, which is how the presentation layer triggers the
    /// opening greeting. Non-empty input is recorded as a user turn first.
    pub async fn handle_turn(
        &self,
        mut session: ScreeningSession,
        input: &str,
    ) -> ScreeningSession {
        let input = input.trim();
        if !input.is_empty() {
            session.push_user(input);
        }

        if is_exit_request(input) && !session.state().is_ended() {
            tracing::info!(
                session_id = %session.id(),
                state = %session.state(),
                "Candidate asked to leave"
            );
            Self::move_to(&mut session, ConversationState::Ended);
        }

        match session.state() {
            ConversationState::Greeting => self.greet(&mut session, input).await,
            ConversationState::CollectingInfo => self.collect_info(&mut session, input).await,
            ConversationState::TechnicalScreening => Self::ask_next_question(&mut session),
            ConversationState::Ended => self.close(&mut session, input).await,
        }

        session
    }

    async fn greet(&self, session: &mut ScreeningSession, input: &str) {
        let greeting = self
            .phrase(session, CompletionPurpose::Greeting, GREETING_SYSTEM_PROMPT, input)
            .await;
        session.push_assistant(greeting);
        Self::move_to(session, ConversationState::CollectingInfo);
    }

    async fn collect_info(&self, session: &mut ScreeningSession, input: &str) {
        let Some(field) = session.pending_field() else {
            self.start_screening(session).await;
            return;
        };

        if !input.is_empty() {
            match check_field(field, input) {
                Ok(value) => {
                    tracing::debug!(session_id = %session.id(), field = %field, "Field recorded");
                    session.record_field(field, value.as_str());
                    session.push_assistant(acknowledgement(&value));
                }
                Err(reason) => {
                    tracing::debug!(
                        session_id = %session.id(),
                        field = %field,
                        reason = %reason,
                        "Field rejected"
                    );
                    session.push_assistant(field.invalid_input_message());
                    return;
                }
            }
        }

        match session.pending_field() {
            Some(next) => session.push_assistant(next.prompt()),
            None => self.start_screening(session).await,
        }
    }

    async fn start_screening(&self, session: &mut ScreeningSession) {
        session.push_assistant(SCREENING_TRANSITION_MESSAGE);

        let tech_stack = session
            .collected()
            .get(CandidateField::TechStack)
            .unwrap_or_default()
            .to_string();
        let questions = self
            .question_generator
            .generate(session.id(), &tech_stack)
            .await;

        session.load_questions(questions);
        Self::move_to(session, ConversationState::TechnicalScreening);
    }

    fn ask_next_question(session: &mut ScreeningSession) {
        if let Some(question) = session.next_question() {
            session.push_assistant(question);
        }
        if session.questions().is_exhausted() {
            Self::move_to(session, ConversationState::Ended);
        }
    }

    async fn close(&self, session: &mut ScreeningSession, input: &str) {
        let closing = self
            .phrase(session, CompletionPurpose::Closing, CLOSING_SYSTEM_PROMPT, input)
            .await;
        session.push_closing(closing);
    }

    /// Asks the completion service for one message, substituting the apology on failure.
    async fn phrase(
        &self,
        session: &ScreeningSession,
        purpose: CompletionPurpose,
        system_prompt: &str,
        input: &str,
    ) -> String {
        let mut request = CompletionRequest::new(RequestMetadata::new(session.id(), purpose))
            .with_system_prompt(system_prompt)
            .with_temperature(self.settings.temperature)
            .with_max_tokens(self.settings.max_tokens);
        if !input.is_empty() {
            request = request.with_message(MessageRole::User, input);
        }

        match self.ai_provider.complete(request).await {
            Ok(response) if !response.content.trim().is_empty() => {
                response.content.trim().to_string()
            }
            Ok(_) => {
                tracing::warn!(
                    session_id = %session.id(),
                    purpose = %purpose,
                    "Completion was empty"
                );
                SERVICE_FALLBACK_MESSAGE.to_string()
            }
            Err(e) => {
                if e.is_transient() {
                    tracing::warn!(
                        session_id = %session.id(),
                        purpose = %purpose,
                        error = %e,
                        "Completion failed"
                    );
                } else {
                    tracing::error!(
                        session_id = %session.id(),
                        purpose = %purpose,
                        error = %e,
                        "Completion failed"
                    );
                }
                SERVICE_FALLBACK_MESSAGE.to_string()
            }
        }
    }

    fn move_to(session: &mut ScreeningSession, target: ConversationState) {
        let from = session.state();
        match session.transition_to(target) {
            Ok(()) => tracing::info!(
                session_id = %session.id(),
                from = %from,
                to = %target,
                "Conversation state changed"
            ),
            Err(e) => tracing::error!(session_id = %session.id(), error = %e, "Rejected state change"),
        }
    }
}
