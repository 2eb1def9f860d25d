//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Text completion service used for conversational phrasing
//!   and technical question generation

mod ai_provider;

pub use ai_provider::{
    AIError, AIProvider, CompletionPurpose, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
