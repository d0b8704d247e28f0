//! Chat-completion client
//!
//! Speaks the OpenAI-compatible `chat/completions` wire format. The defaults
//! point at Gemini's OpenAI-compatible surface, but any provider exposing
//! that format works via [`ApiConfig::with_api_base`].

use serde::{Deserialize, Serialize};

use crate::error::{CompletionError, ConfigError};
use crate::prompt::ChatMessage;

/// Default API base URL (Gemini's OpenAI-compatible endpoint)
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";

/// Environment variable supplying the API key
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Maximum length of the error-body excerpt kept in [`CompletionError::ApiStatus`]
const ERROR_DETAIL_LIMIT: usize = 200;

/// Credentials and endpoint selection for the completion client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bearer token for the provider
    pub api_key: String,
    /// Model identifier sent with every request
    pub model: String,
    /// URL prefix the `chat/completions` path is appended to
    pub api_base: String,
}

impl ApiConfig {
    /// Create a config with the default endpoint and model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Read the API key from the environment
    ///
    /// Fails fast when the variable is unset or blank, before any network
    /// I/O happens.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_ENV))?;
        Ok(Self::new(api_key))
    }

    /// Override the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

/// Chat-completion request body
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

/// Chat-completion response body (partial)
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

/// One completion candidate
#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

/// The generated message inside a choice
#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: String,
}

/// Client for one OpenAI-compatible provider
///
/// Holds a reused `reqwest::Client`; stateless from the caller's
/// perspective, so one instance can serve any number of sequential calls.
pub struct CompletionClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl CompletionClient {
    /// Create a client for the given config
    pub fn new(config: ApiConfig) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(CompletionError::ClientBuildError)?;
        Ok(Self { http, config })
    }

    /// Model identifier this client sends
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        )
    }

    /// Send messages and return the first choice's content unmodified
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages,
        };

        tracing::debug!(model = body.model, messages = messages.len(), "Requesting completion");

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(CompletionError::ApiStatus {
                status: status.as_u16(),
                detail: excerpt(&detail),
            });
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        let choice = payload
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::NoChoices)?;

        Ok(choice.message.content)
    }
}

/// Trim an error body down to a loggable excerpt
fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.len() <= ERROR_DETAIL_LIMIT {
        return trimmed.to_string();
    }
    let mut cut = ERROR_DETAIL_LIMIT;
    while !trimmed.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &trimmed[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ApiConfig::new("key");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_config_overrides() {
        let config = ApiConfig::new("key")
            .with_model("other-model")
            .with_api_base("https://api.example.com/v1/");
        assert_eq!(config.model, "other-model");
        assert_eq!(config.api_base, "https://api.example.com/v1/");
    }

    #[test]
    fn test_completions_url_joins_once() {
        let with_slash = CompletionClient::new(
            ApiConfig::new("key").with_api_base("https://api.example.com/v1/"),
        )
        .unwrap();
        let without_slash = CompletionClient::new(
            ApiConfig::new("key").with_api_base("https://api.example.com/v1"),
        )
        .unwrap();

        assert_eq!(
            with_slash.completions_url(),
            "https://api.example.com/v1/chat/completions"
        );
        assert_eq!(
            without_slash.completions_url(),
            "https://api.example.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_from_env_requires_key() {
        // Single test mutates the variable to avoid racing a parallel test.
        std::env::remove_var(API_KEY_ENV);
        assert!(matches!(
            ApiConfig::from_env(),
            Err(ConfigError::MissingApiKey(_))
        ));

        std::env::set_var(API_KEY_ENV, "   ");
        assert!(matches!(
            ApiConfig::from_env(),
            Err(ConfigError::MissingApiKey(_))
        ));

        std::env::set_var(API_KEY_ENV, "test-key");
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-key");
        std::env::remove_var(API_KEY_ENV);
    }

    #[test]
    fn test_excerpt_truncates_long_bodies() {
        let long = "x".repeat(500);
        let detail = excerpt(&long);
        assert!(detail.len() <= ERROR_DETAIL_LIMIT + 3);
        assert!(detail.ends_with("..."));

        assert_eq!(excerpt("  short  "), "short");
    }

    #[test]
    fn test_response_decoding() {
        let json = r#"{"id":"c1","choices":[{"index":0,"message":{"role":"assistant","content":"hello"}}]}"#;
        let payload: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(payload.choices.len(), 1);
        assert_eq!(payload.choices[0].message.content, "hello");
    }

    #[test]
    fn test_response_decoding_without_choices() {
        let payload: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.choices.is_empty());
    }
}
