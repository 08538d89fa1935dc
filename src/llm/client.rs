//! Blocking client for an OpenAI-compatible chat-completions API.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::{
    API_KEY_ENV, DEFAULT_API_BASE, DEFAULT_MODEL, HTTP_TIMEOUT_SECS, MODEL_TEMPERATURE,
};
use crate::error::{AuditError, Result};

/// User agent string identifying this auditor.
const USER_AGENT: &str = concat!("contract-auditor/", env!("CARGO_PKG_VERSION"));

/// Maximum number of retry attempts for transient failures.
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
const RETRY_BASE_DELAY_MS: u64 = 500;

/// System prompt pinning the model into audit mode.
pub const SYSTEM_PROMPT: &str = "You are a strict Legal Auditor AI. Output only factual \
     analysis based on the provided text. Do not describe yourself.";

/// Chat-completions request body.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Chat-completions response body (only what we read).
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Client for the hosted annotation model.
pub struct LlmClient {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    /// Create a client with explicit endpoint, key and model.
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            api_base: api_base.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Create a client from the environment, with an optional model override.
    ///
    /// Reads the API key from [`API_KEY_ENV`]; fails fast when it is unset
    /// so no document is processed before the user can fix the setup.
    pub fn from_env(model: Option<&str>) -> Result<Self> {
        let api_key =
            std::env::var(API_KEY_ENV).map_err(|_| AuditError::MissingApiKey(API_KEY_ENV))?;
        Self::new(
            DEFAULT_API_BASE,
            api_key,
            model.unwrap_or(DEFAULT_MODEL),
        )
    }

    /// The model this client sends requests to.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one chat completion and return the message content.
    ///
    /// With `json_mode` the API is asked for a `json_object` response so
    /// verdicts parse reliably. Transient failures (connect/timeout, 429,
    /// 5xx) are retried with exponential backoff; other client errors are
    /// returned immediately.
    pub fn chat(&self, user_prompt: &str, json_mode: bool) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: MODEL_TEMPERATURE,
            response_format: json_mode.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        };

        let url = format!("{}/chat/completions", self.api_base);
        let mut last_error: Option<String> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 500ms, 1000ms, 2000ms
                let delay = RETRY_BASE_DELAY_MS * (1 << (attempt - 1));
                tracing::debug!(attempt, delay_ms = delay, "Retrying after delay");
                thread::sleep(Duration::from_millis(delay));
            }

            match self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&request)
                .send()
            {
                Ok(response) => {
                    let status = response.status();

                    // Retry on rate limiting and server errors
                    if status.as_u16() == 429 || status.is_server_error() {
                        tracing::warn!(
                            status = %status,
                            attempt = attempt + 1,
                            max_retries = MAX_RETRIES,
                            "Transient API error, will retry"
                        );
                        last_error = Some(format!("API error: {status}"));
                        continue;
                    }

                    // Don't retry other client errors (4xx) - they won't succeed
                    let response = response.error_for_status()?;
                    let body: ChatResponse = response.json()?;
                    let content = body
                        .choices
                        .into_iter()
                        .next()
                        .map(|c| c.message.content)
                        .ok_or_else(|| {
                            AuditError::ModelResponse("response contained no choices".to_string())
                        })?;
                    return Ok(content.trim().to_string());
                }
                Err(e) => {
                    // Retry on connection/timeout errors
                    if e.is_connect() || e.is_timeout() {
                        tracing::warn!(
                            error = %e,
                            attempt = attempt + 1,
                            max_retries = MAX_RETRIES,
                            "Connection error, will retry"
                        );
                        last_error = Some(e.to_string());
                        continue;
                    }
                    return Err(AuditError::Http(e));
                }
            }
        }

        Err(AuditError::RetriesExhausted {
            attempts: MAX_RETRIES,
            message: last_error.unwrap_or_else(|| "Unknown error".to_string()),
        })
    }
}
