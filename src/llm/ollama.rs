//! Ollama REST API client.
//!
//! Thin HTTP wrapper for `/api/tags` and `/api/chat`. Pure parsing in
//! `parse_tags` / `parse_chat` for testability.

use std::time::Duration;

use super::config::OllamaConfig;
use super::types::{ChatReply, LlmError, Message, ModelDescriptor, OllamaApi};

// =============================================================================
// CLIENT
// =============================================================================

pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
}

impl OllamaClient {
    /// Build a client for `config.base_url`, applying any configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: OllamaConfig) -> Result<Self, LlmError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.timeouts.connect_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Read the whole body and split on status. Only exactly 200 counts as success.
    async fn read_body(response: reqwest::Response) -> Result<String, LlmError> {
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(error_chain(&e)))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl OllamaApi for OllamaClient {
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, LlmError> {
        let url = format!("{}/api/tags", self.base_url);
        tracing::debug!(%url, "listing models");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(error_chain(&e)))?;

        let text = Self::read_body(response).await?;
        parse_tags(&text)
    }

    async fn chat(&self, model: &str, messages: &[Message]) -> Result<ChatReply, LlmError> {
        let url = format!("{}/api/chat", self.base_url);
        tracing::debug!(%url, model, messages = messages.len(), "sending chat request");

        let body = ApiChatRequest { model, messages, stream: false };
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(error_chain(&e)))?;

        let text = Self::read_body(response).await?;
        parse_chat(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
}

#[derive(serde::Deserialize)]
struct ApiTagsResponse {
    #[serde(default)]
    models: Vec<ModelDescriptor>,
}

#[derive(serde::Deserialize)]
struct ApiChatResponse {
    #[serde(default)]
    message: Option<ApiChatMessage>,
}

#[derive(serde::Deserialize)]
struct ApiChatMessage {
    #[serde(default)]
    content: Option<String>,
}

// =============================================================================
// ERROR TEXT
// =============================================================================

/// Render an error with its whole `source()` chain, so transport failures
/// read `error sending request ...: tcp connect error: Connection refused`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_tags(json: &str) -> Result<Vec<ModelDescriptor>, LlmError> {
    let api: ApiTagsResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    Ok(api.models)
}

fn parse_chat(json: &str) -> Result<ChatReply, LlmError> {
    let api: ApiChatResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    Ok(ChatReply { content: api.message.and_then(|m| m.content) })
}

#[cfg(test)]
#[path = "ollama_test.rs"]
mod tests;
