//! Mistral chat-completions client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::TextGenerator;
use crate::config::Config;
use crate::error::{Result, ToneError};

/// Fallback message when an error response carries none.
const DEFAULT_ERROR_MESSAGE: &str = "Mistral API error";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

// == Mistral Client ==
pub struct MistralClient {
    api_key: String,
    api_url: String,
    model: String,
    max_tokens: u32,
    client: Client,
}

impl std::fmt::Debug for MistralClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MistralClient")
            .field("api_key", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl MistralClient {
    pub fn new(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        model: impl Into<String>,
        max_tokens: u32,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ToneError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key: api_key.into(),
            api_url: api_url.into(),
            model: model.into(),
            max_tokens,
            client,
        })
    }

    /// Builds a client from configuration.
    ///
    /// Returns `Ok(None)` when no API key is configured.
    pub fn from_config(config: &Config) -> Result<Option<Self>> {
        let Some(api_key) = config.mistral_api_key.as_deref() else {
            return Ok(None);
        };

        Self::new(
            api_key,
            config.mistral_api_url.as_str(),
            config.mistral_model.as_str(),
            config.max_tokens,
            Duration::from_secs(config.upstream_timeout),
        )
        .map(Some)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
        }
    }

    /// Pulls the trimmed text of the first choice out of a completion.
    pub fn extract_content(response: &Value) -> Option<String> {
        response["choices"][0]["message"]["content"]
            .as_str()
            .map(|content| content.trim().to_string())
    }

    /// Reads the `message` field of an error body, if any.
    pub fn extract_error_message(body: &Value) -> Option<String> {
        body.get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }
}

#[async_trait]
impl TextGenerator for MistralClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(model = %self.model, prompt_chars = prompt.len(), "requesting completion");

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| ToneError::Internal(format!("Failed to reach Mistral API: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .as_ref()
                .and_then(Self::extract_error_message)
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
            warn!(status = status.as_u16(), %message, "Mistral API returned an error");
            return Err(ToneError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| ToneError::Internal(format!("Invalid Mistral API response: {}", e)))?;

        Self::extract_content(&data).ok_or_else(|| {
            ToneError::Internal("Mistral API response contained no completion".to_string())
        })
    }
}
