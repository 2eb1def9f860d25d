//! Text completion port.
//!
//! Every piece of generated text in a screening session (the greeting, the
//! technical questions and the closing message) goes through [`AIProvider`].
//! A request carries an ordered list of role-tagged messages plus an optional
//! system prompt, and yields one string. No streaming, no retries.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct CannedProvider;
//!
//! #[async_trait]
//! impl AIProvider for CannedProvider {
//!     async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
//!         Ok(CompletionResponse {
//!             content: "['What is ownership?']".to_string(),
//!             usage: TokenUsage::default(),
//!             model: "canned".to_string(),
//!             finish_reason: FinishReason::Stop,
//!         })
//!     }
//!     // ... provider_info
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::SessionId;

/// Port for the external text completion service.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Makes exactly one completion attempt.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;

    /// Name and model of the backing service, for logs.
    fn provider_info(&self) -> ProviderInfo;
}

/// One completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Conversation messages, in order.
    pub messages: Vec<Message>,
    /// Instruction sent ahead of the messages.
    pub system_prompt: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub metadata: RequestMetadata,
}

impl CompletionRequest {
    pub fn new(metadata: RequestMetadata) -> Self {
        Self {
            messages: Vec::new(),
            system_prompt: None,
            max_tokens: None,
            temperature: None,
            metadata,
        }
    }

    /// Appends a message.
    pub fn with_message(mut self, role: MessageRole, content: impl Into<String>) -> Self {
        self.messages.push(Message {
            role,
            content: content.into(),
        });
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }
}

/// A role-tagged message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

/// Who a message is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    /// Wire name used by chat-completion APIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// What a completion is for within a screening session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionPurpose {
    /// Opening message of the session.
    Greeting,
    /// Technical question list for the candidate's tech stack.
    QuestionGeneration,
    /// Closing message once the session has ended.
    Closing,
}

impl CompletionPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionPurpose::Greeting => "greeting",
            CompletionPurpose::QuestionGeneration => "question_generation",
            CompletionPurpose::Closing => "closing",
        }
    }
}

impl fmt::Display for CompletionPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Correlates a request with its session in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestMetadata {
    pub session_id: SessionId,
    pub purpose: CompletionPurpose,
}

impl RequestMetadata {
    pub fn new(session_id: SessionId, purpose: CompletionPurpose) -> Self {
        Self {
            session_id,
            purpose,
        }
    }
}

/// Result of a completion.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated text, already trimmed by the adapter.
    pub content: String,
    pub usage: TokenUsage,
    /// Model that generated the response.
    pub model: String,
    pub finish_reason: FinishReason,
}

/// Token counts reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    /// Hit the max token limit; the text may be cut short.
    Length,
    ContentFilter,
}

/// Backing service details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "openai").
    pub name: String,
    /// Model identifier (e.g., "gpt-3.5-turbo").
    pub model: String,
    /// Context window in tokens.
    pub max_context_tokens: u32,
}

impl ProviderInfo {
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        max_context_tokens: u32,
    ) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            max_context_tokens,
        }
    }
}

/// Text completion failures.
#[derive(Debug, thiserror::Error)]
pub enum AIError {
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// Prompt plus messages exceed the model's context window.
    #[error("context too long for model")]
    ContextTooLong,

    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl AIError {
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if the failure is likely transient.
    ///
    /// Used only to pick the log level; no call is ever repeated.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AIError::RateLimited { .. }
                | AIError::Unavailable { .. }
                | AIError::Network(_)
                | AIError::Timeout { .. }
        )
    }
}
