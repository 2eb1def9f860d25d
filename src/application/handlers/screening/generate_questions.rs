//! Technical question generation.
//!
//! Asks the completion service for a short list of questions tailored to the
//! candidate's tech stack. Whatever goes wrong (service failure or an answer
//! that does not decode as a list of strings) the caller still receives a
//! usable question set.

use std::sync::Arc;
use thiserror::Error;

use super::settings::CompletionSettings;
use crate::domain::foundation::SessionId;
use crate::domain::screening::{
    fallback_questions, parse_question_list, tech_stack_message, QuestionParseError,
    QUESTION_GENERATION_SYSTEM_PROMPT,
};
use crate::ports::{
    AIError, AIProvider, CompletionPurpose, CompletionRequest, MessageRole, RequestMetadata,
};

/// Why a generated question list could not be used.
#[derive(Debug, Error)]
pub enum QuestionGenerationError {
    #[error("completion service failed: {0}")]
    Provider(#[from] AIError),

    #[error("response is not a list of questions: {0}")]
    Parse(#[from] QuestionParseError),
}

/// Generates technical screening questions from a tech stack description.
pub struct QuestionGenerator<A>
where
    A: AIProvider,
{
    ai_provider: Arc<A>,
    settings: CompletionSettings,
}

impl<A> QuestionGenerator<A>
where
    A: AIProvider,
{
    /// Creates a generator with default completion settings.
    pub fn new(ai_provider: Arc<A>) -> Self {
        Self {
            ai_provider,
            settings: CompletionSettings::default(),
        }
    }

    /// Overrides the completion settings.
    pub fn with_settings(mut self, settings: CompletionSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the generated questions, or the fallback set if they are unusable.
    ///
    /// Never fails.
    pub async fn generate(&self, session_id: SessionId, tech_stack: &str) -> Vec<String> {
        match self.try_generate(session_id, tech_stack).await {
            Ok(questions) => {
                tracing::debug!(
                    session_id = %session_id,
                    count = questions.len(),
                    "Generated technical questions"
                );
                questions
            }
            Err(e) => {
                tracing::warn!(
                    session_id = %session_id,
                    error = %e,
                    "Falling back to templated technical questions"
                );
                fallback_questions(tech_stack)
            }
        }
    }

    /// Single attempt at generating and decoding a question list.
    pub async fn try_generate(
        &self,
        session_id: SessionId,
        tech_stack: &str,
    ) -> Result<Vec<String>, QuestionGenerationError> {
        let metadata = RequestMetadata::new(session_id, CompletionPurpose::QuestionGeneration);
        let request = CompletionRequest::new(metadata)
            .with_system_prompt(QUESTION_GENERATION_SYSTEM_PROMPT)
            .with_message(MessageRole::User, tech_stack_message(tech_stack))
            .with_temperature(self.settings.temperature)
            .with_max_tokens(self.settings.max_tokens);

        let response = self.ai_provider.complete(request).await?;
        Ok(parse_question_list(&response.content)?)
    }
}
