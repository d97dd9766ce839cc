/// LLM Client — the single point of entry for all completion API calls.
///
/// ARCHITECTURAL RULE: No other module may call the completion API directly.
/// Generation code depends on the `CompletionService` trait; `LlmClient` is the
/// production implementation.
///
/// Exactly one attempt per call: no retry, no backoff.
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion service rejected the API key: {0}")]
    Unauthorized(String),

    #[error("completion service rate limit reached: {0}")]
    RateLimited(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Anything that turns a prompt into generated text.
/// Carried in `AppState` as `Arc<dyn CompletionService>`.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, api_key: &str, system: &str, prompt: &str)
        -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the text of the first non-empty choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .iter()
            .filter_map(|c| c.message.content.as_deref())
            .find(|text| !text.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Chat-completions client. The API key is supplied per call because each
/// request may carry its own.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    model: String,
    temperature: f32,
}

impl LlmClient {
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_url: config.llm_api_url.clone(),
            model: config.llm_model.clone(),
            temperature: config.llm_temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionService for LlmClient {
    async fn complete(
        &self,
        api_key: &str,
        system: &str,
        prompt: &str,
    ) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(status, response.text().await);
            warn!("Completion API returned {}: {}", status, body);
            return Err(classify_failure(status, &body));
        }

        let chat: ChatResponse = response.json().await?;

        if let Some(usage) = &chat.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        chat.text().map(str::to_string).ok_or(LlmError::EmptyContent)
    }
}

/// Body of a failed response; an unreadable body is logged and treated as empty.
fn error_body<E: std::fmt::Display>(status: StatusCode, read: Result<String, E>) -> String {
    read.unwrap_or_else(|e| {
        warn!("Could not read completion API error body ({}): {}", status, e);
        String::new()
    })
}

/// Maps a non-success response to the matching `LlmError`.
fn classify_failure(status: StatusCode, body: &str) -> LlmError {
    let message = serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Unauthorized(message),
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited(message),
        _ => LlmError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

#[cfg(test)]
pub(crate) mod stub {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    /// Canned completion service that records every prompt it receives.
    pub struct StubCompletion {
        reply: Result<String, u16>,
        calls: AtomicUsize,
        prompts: Mutex<Vec<(String, String, String)>>,
    }

    impl StubCompletion {
        pub fn replying(html: &str) -> Self {
            Self {
                reply: Ok(html.to_string()),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        /// Fails every call with the given upstream status.
        pub fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// `(api_key, system, prompt)` of the most recent call.
        pub fn last_call(&self) -> Option<(String, String, String)> {
            self.prompts.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl CompletionService for StubCompletion {
        async fn complete(
            &self,
            api_key: &str,
            system: &str,
            prompt: &str,
        ) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push((
                api_key.to_string(),
                system.to_string(),
                prompt.to_string(),
            ));
            match &self.reply {
                Ok(html) => Ok(html.clone()),
                Err(status) => Err(classify_failure(
                    StatusCode::from_u16(*status).unwrap(),
                    r#"{"error": {"message": "stubbed failure"}}"#,
                )),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_auth_failures() {
        let err = classify_failure(
            StatusCode::UNAUTHORIZED,
            r#"{"error": {"message": "Incorrect API key provided"}}"#,
        );
        match err {
            LlmError::Unauthorized(msg) => assert_eq!(msg, "Incorrect API key provided"),
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_rate_limit() {
        let err = classify_failure(StatusCode::TOO_MANY_REQUESTS, "slow down");
        assert!(matches!(err, LlmError::RateLimited(ref m) if m == "slow down"));
    }

    #[test]
    fn test_classify_other_status_keeps_raw_body() {
        let err = classify_failure(StatusCode::BAD_GATEWAY, "upstream exploded");
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_error_body_is_treated_as_empty() {
        let body = error_body(StatusCode::BAD_GATEWAY, Err::<String, _>("connection reset"));
        assert!(body.is_empty());
        assert_eq!(
            error_body(StatusCode::BAD_GATEWAY, Ok::<_, &str>("raw".to_string())),
            "raw"
        );

        match classify_failure(StatusCode::BAD_GATEWAY, &body) {
            LlmError::Api { status, .. } => assert_eq!(status, 502),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_response_text_skips_empty_choices() {
        let response: ChatResponse = serde_json::from_str(
            r#"{
                "choices": [
                    {"message": {"content": "  "}},
                    {"message": {"content": "<body>ok</body>"}}
                ],
                "usage": {"prompt_tokens": 10, "completion_tokens": 5}
            }"#,
        )
        .unwrap();
        assert_eq!(response.text(), Some("<body>ok</body>"));
    }

    #[test]
    fn test_response_without_content_has_no_text() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_client_uses_configured_model() {
        let config = Config::from_lookup(|key| match key {
            "LLM_MODEL" => Some("gpt-test".to_string()),
            _ => None,
        })
        .unwrap();
        let client = LlmClient::new(&config).unwrap();
        assert_eq!(client.model(), "gpt-test");
    }
}
