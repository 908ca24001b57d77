//! Outbound client for the completion model service.
//!
//! The service is treated as opaque: one system prompt plus one user message
//! in, one text completion out. Calls are at-most-once; retry policy belongs
//! to the caller's UX, not here.

use std::time::Instant;

use async_trait::async_trait;
use metrics::{counter, histogram};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::ModelSettings;
use crate::infra::error::InfraError;

#[derive(Debug, Error)]
pub enum ModelCallError {
    #[error("model request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model service returned status {status}")]
    Status { status: u16 },
    #[error("model response carried no text content")]
    EmptyResponse,
}

/// Single-shot completion call. Implemented by the HTTP client in production
/// and by in-memory doubles in tests.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ModelCallError>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

/// Chat-completions client over HTTP.
pub struct HttpCompletionClient {
    client: reqwest::Client,
    settings: ModelSettings,
}

impl HttpCompletionClient {
    pub fn new(settings: ModelSettings) -> Result<Self, InfraError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|err| {
                InfraError::configuration(format!("failed to build HTTP client: {err}"))
            })?;
        Ok(Self { client, settings })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ModelCallError> {
        let request = ChatRequest {
            model: &self.settings.model,
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
            temperature: self.settings.temperature,
        };

        counter!("advertorial_model_calls_total").increment(1);
        let started = Instant::now();

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.settings.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ModelCallError::Status {
                status: status.as_u16(),
            });
        }

        let body: ChatResponse = response.json().await?;
        histogram!("advertorial_model_call_ms").record(started.elapsed().as_millis() as f64);

        // First text content part only; additional choices are ignored.
        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(ModelCallError::EmptyResponse)?;

        debug!(
            target = "infra::model",
            response_bytes = content.len(),
            "completion received"
        );

        Ok(content)
    }
}
