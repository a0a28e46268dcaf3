/// LLM Client — the single point of entry for all model calls in Tabula.
///
/// ARCHITECTURAL RULE: No other module may call the completion API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: gpt-4.1 (hardcoded — do not make configurable to prevent drift)
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

/// The model used for all LLM calls in Tabula.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4.1";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("model output parsing failed: {0}")]
    OutputParse(#[source] Box<LlmError>),
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: &'static str,
}

impl ResponseFormat {
    fn json_object() -> Self {
        Self {
            format_type: "json_object",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the assistant text from the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
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

/// Transport seam for completion calls. The production implementation speaks
/// HTTP to an OpenAI-compatible endpoint; tests script responses to exercise
/// the fallback control flow without a network.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: &ChatRequest<'_>) -> Result<ChatResponse, LlmError>;
}

/// HTTP transport for the chat completions endpoint.
pub struct HttpBackend {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpBackend {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl CompletionBackend for HttpBackend {
    async fn complete(&self, request: &ChatRequest<'_>) -> Result<ChatResponse, LlmError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }
}

/// The single LLM client used by all services in Tabula.
/// Wraps an OpenAI-compatible chat completions endpoint with a strict-JSON
/// primary attempt and a single fence-stripping fallback.
#[derive(Clone)]
pub struct LlmClient {
    backend: Arc<dyn CompletionBackend>,
}

impl LlmClient {
    pub fn new(backend: impl CompletionBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    fn request<'a>(&self, system: &'a str, user: &'a str, json_mode: bool) -> ChatRequest<'a> {
        ChatRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: json_mode.then(ResponseFormat::json_object),
        }
    }

    /// One completion attempt: call the backend and parse the assistant text
    /// as JSON. Fences are only stripped on the unconstrained (fallback) path.
    async fn attempt(&self, system: &str, user: &str, json_mode: bool) -> Result<Value, LlmError> {
        let request = self.request(system, user, json_mode);
        let response = self.backend.complete(&request).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        let text = if json_mode {
            text.trim()
        } else {
            strip_json_fences(text)
        };
        serde_json::from_str(text).map_err(LlmError::Parse)
    }

    /// Calls the model and returns its output parsed as JSON.
    ///
    /// The primary attempt requests the endpoint's strict-JSON response mode.
    /// If it fails for any reason — transport error, API rejection of the
    /// JSON-mode option, empty or non-JSON content — a single fallback runs
    /// without the constraint, stripping Markdown code fences before parsing.
    /// No retries beyond that.
    pub async fn extract_json(&self, system: &str, user: &str) -> Result<Value, LlmError> {
        match self.attempt(system, user, true).await {
            Ok(value) => Ok(value),
            Err(primary) => {
                warn!("strict-JSON completion attempt failed, falling back: {primary}");
                self.attempt(system, user, false)
                    .await
                    .map_err(|inner| LlmError::OutputParse(Box::new(inner)))
            }
        }
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
