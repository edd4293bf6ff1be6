//! Groq chat-completions client
//!
//! Single non-streaming POST against the OpenAI-compatible endpoint: the
//! configured system instruction plus the user message, temperature 0. No
//! retry or backoff — a failing call surfaces immediately; the only added
//! compensation is the configured request timeout.

use crate::classifier::MessageClassifier;
use crate::config::ProviderConfig;
use async_trait::async_trait;
use bullyguard_core::{prompt, Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Classification client backed by a Groq-hosted model
#[derive(Debug)]
pub struct GroqClient {
    config: ProviderConfig,
    http: reqwest::Client,
}

impl GroqClient {
    /// Build a client from validated configuration
    pub fn new(config: ProviderConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::internal(format!("failed to build http client: {e}")))?;

        Ok(Self { config, http })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn request_body(&self, message: &str) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: self.config.instruction.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: message.to_string(),
                },
            ],
            temperature: prompt::TEMPERATURE,
        }
    }
}

#[async_trait]
impl MessageClassifier for GroqClient {
    async fn classify(&self, message: &str) -> Result<String> {
        debug!(model = %self.config.model, "sending classification request");

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&self.request_body(message))
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(%status, "provider returned non-success status");
            return Err(Error::provider(format!("provider returned {status}: {detail}")));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::provider(format!("undecodable provider response: {e}")))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::provider("provider response contained no choices"))
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

fn map_request_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout
    } else {
        Error::provider(format!("provider request failed: {err}"))
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
