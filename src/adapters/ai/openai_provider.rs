//! OpenAI Provider - Implementation of AIProvider for OpenAI's chat API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIConfig::new(api_key)
//!     .with_model("gpt-3.5-turbo")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let provider = OpenAIProvider::new(config)?;
//! ```
//!
//! Each `complete` call makes exactly one HTTP request. Failures are mapped
//! to `AIError` and returned to the caller, which decides what to show.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gpt-3.5-turbo", "gpt-4o").
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAIConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-3.5-turbo".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI API provider implementation.
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIProvider {
    /// Creates a new OpenAI provider with the given configuration.
    pub fn new(config: OpenAIConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Converts our request to OpenAI's format.
    fn to_openai_request(&self, request: &CompletionRequest) -> OpenAIRequest {
        let system = request.system_prompt.iter().map(|prompt| OpenAIMessage {
            role: "system".to_string(),
            content: prompt.clone(),
        });

        let conversation = request.messages.iter().map(|msg| OpenAIMessage {
            role: msg.role.as_str().to_string(),
            content: msg.content.clone(),
        });

        OpenAIRequest {
            model: self.config.model.clone(),
            messages: system.chain(conversation).collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    /// Sends a request.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let openai_request = self.to_openai_request(request);

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&openai_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, AIError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(error_for_status(status.as_u16(), &error_body))
    }

    /// Parses a non-streaming response.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let response = self.handle_response_status(response).await?;

        let openai_response: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        into_completion(openai_response)
    }
}

#[async_trait]
impl AIProvider for OpenAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        tracing::debug!(
            session_id = %request.metadata.session_id,
            purpose = %request.metadata.purpose,
            model = %self.config.model,
            "Sending chat completion request"
        );

        let response = self.send_request(&request).await?;
        let completion = self.parse_response(response).await?;

        tracing::debug!(
            session_id = %request.metadata.session_id,
            purpose = %request.metadata.purpose,
            total_tokens = completion.usage.total_tokens,
            finish_reason = ?completion.finish_reason,
            "Chat completion received"
        );
        Ok(completion)
    }

    fn provider_info(&self) -> ProviderInfo {
        let max_context = match self.config.model.as_str() {
            m if m.starts_with("gpt-4o") || m.starts_with("gpt-4-turbo") => 128000,
            m if m.starts_with("gpt-4") => 8192,
            m if m.starts_with("gpt-3.5") => 16385,
            _ => 128000,
        };

        ProviderInfo::new("openai", &self.config.model, max_context)
    }
}

/// Maps a non-success HTTP status and body to an error.
fn error_for_status(status: u16, error_body: &str) -> AIError {
    match status {
        401 => AIError::AuthenticationFailed,
        429 => AIError::rate_limited(parse_retry_after(error_body)),
        400 => {
            if error_body.contains("maximum context length")
                || error_body.contains("context_length_exceeded")
            {
                AIError::ContextTooLong
            } else {
                AIError::InvalidRequest(error_body.to_string())
            }
        }
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, error_body)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, error_body)),
    }
}

/// Parses retry-after from an error response, defaulting to 30 seconds.
fn parse_retry_after(error_body: &str) -> u32 {
    serde_json::from_str::<serde_json::Value>(error_body)
        .ok()
        .and_then(|parsed| {
            let message = parsed.get("error")?.get("message")?.as_str()?.to_string();
            let idx = message.find("try again in ")?;
            let digits: String = message[idx + 13..]
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse().ok()
        })
        .unwrap_or(30)
}

/// Converts a decoded API response into our completion type.
fn into_completion(openai_response: OpenAIResponse) -> Result<CompletionResponse, AIError> {
    let choice = openai_response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AIError::parse("No choices in response"))?;

    let finish_reason = match choice.finish_reason.as_deref() {
        Some("length") => FinishReason::Length,
        Some("content_filter") => FinishReason::ContentFilter,
        _ => FinishReason::Stop,
    };

    let usage = openai_response
        .usage
        .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
        .unwrap_or_default();

    Ok(CompletionResponse {
        content: choice.message.content.trim().to_string(),
        usage,
        model: openai_response.model,
        finish_reason,
    })
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    model: String,
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;
    use crate::ports::{CompletionPurpose, MessageRole, RequestMetadata};

    fn provider(model: &str) -> OpenAIProvider {
        OpenAIProvider::new(OpenAIConfig::new("test-key").with_model(model)).unwrap()
    }

    fn greeting_request() -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(
            SessionId::new(),
            CompletionPurpose::Greeting,
        ))
    }

    #[test]
    fn config_builder_works() {
        let config = OpenAIConfig::new("test-key")
            .with_model("gpt-4o")
            .with_base_url("https://custom.api.com")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn config_debug_does_not_leak_key() {
        let config = OpenAIConfig::new("sk-very-secret");
        assert!(!format!("{:?}", config).contains("sk-very-secret"));
    }

    #[test]
    fn completions_url_tolerates_trailing_slash() {
        let provider = OpenAIProvider::new(
            OpenAIConfig::new("k").with_base_url("http://localhost:8080/v1/"),
        )
        .unwrap();
        assert_eq!(
            provider.completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn request_puts_system_prompt_first() {
        let request = greeting_request()
            .with_system_prompt("Be brief")
            .with_message(MessageRole::User, "Tech Stack: Rust")
            .with_temperature(0.7)
            .with_max_tokens(150);

        let body = provider("gpt-3.5-turbo").to_openai_request(&request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "Be brief");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["max_tokens"], 150);
    }

    #[test]
    fn request_omits_unset_parameters() {
        let request = greeting_request();
        let json = serde_json::to_value(provider("gpt-4o").to_openai_request(&request)).unwrap();
        assert!(json.get("max_tokens").is_none());
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn status_mapping() {
        assert!(matches!(error_for_status(401, ""), AIError::AuthenticationFailed));
        assert!(matches!(
            error_for_status(429, ""),
            AIError::RateLimited { retry_after_secs: 30 }
        ));
        assert!(matches!(
            error_for_status(400, r#"{"error":{"code":"context_length_exceeded"}}"#),
            AIError::ContextTooLong
        ));
        assert!(matches!(error_for_status(400, "bad"), AIError::InvalidRequest(_)));
        assert!(matches!(error_for_status(503, ""), AIError::Unavailable { .. }));
        assert!(matches!(error_for_status(418, ""), AIError::Network(_)));
    }

    #[test]
    fn parse_retry_after_from_message() {
        let error = r#"{"error":{"message":"Rate limit exceeded. Please try again in 20s."}}"#;
        assert_eq!(parse_retry_after(error), 20);
    }

    #[test]
    fn parse_retry_after_default() {
        assert_eq!(parse_retry_after(r#"{"error":{"message":"nope"}}"#), 30);
        assert_eq!(parse_retry_after("not json"), 30);
    }

    #[test]
    fn response_content_is_trimmed() {
        let body: OpenAIResponse = serde_json::from_str(
            r#"{"model":"gpt-3.5-turbo","choices":[{"message":{"role":"assistant","content":"  Hello!\n"},"finish_reason":"stop"}],"usage":{"prompt_tokens":12,"completion_tokens":3}}"#,
        )
        .unwrap();

        let completion = into_completion(body).unwrap();
        assert_eq!(completion.content, "Hello!");
        assert_eq!(completion.usage.total_tokens, 15);
        assert_eq!(completion.finish_reason, FinishReason::Stop);
    }

    #[test]
    fn response_without_choices_is_parse_error() {
        let body: OpenAIResponse =
            serde_json::from_str(r#"{"model":"gpt-3.5-turbo","choices":[]}"#).unwrap();
        assert!(matches!(into_completion(body), Err(AIError::Parse(_))));
    }

    #[test]
    fn length_finish_reason_is_mapped() {
        let body: OpenAIResponse = serde_json::from_str(
            r#"{"model":"m","choices":[{"message":{"role":"assistant","content":"['Q1'"},"finish_reason":"length"}]}"#,
        )
        .unwrap();
        assert_eq!(into_completion(body).unwrap().finish_reason, FinishReason::Length);
    }

    #[test]
    fn provider_info_reports_context_window() {
        let info = provider("gpt-3.5-turbo").provider_info();
        assert_eq!(info.name, "openai");
        assert_eq!(info.max_context_tokens, 16385);
        assert_eq!(provider("gpt-4o-mini").provider_info().max_context_tokens, 128000);
    }
}
