//! LLM types — Ollama wire types, errors, and the client trait.
//!
//! Only the fields this front-end reads are modelled. Everything else the
//! inference server returns is ignored by serde.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by inference-server client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The HTTP request to the inference server failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The inference server returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The inference server response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// MESSAGE TYPES
// =============================================================================

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single role-tagged message in a `/api/chat` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// One entry of the `/api/tags` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub name: String,
}

/// Reply to a non-streaming chat request.
///
/// `content` is `None` when the server answered 200 but carried no
/// `message.content` field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatReply {
    pub content: Option<String>,
}

// =============================================================================
// CLIENT TRAIT
// =============================================================================

/// Async seam over the inference server. Enables mocking in tests.
#[async_trait::async_trait]
pub trait OllamaApi: Send + Sync {
    /// Fetch the model listing.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] on transport failure, non-200 status, or a
    /// malformed body.
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, LlmError>;

    /// Send one non-streaming chat request.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ApiResponse`] for non-200 statuses and another
    /// variant when the request could not be completed or parsed.
    async fn chat(&self, model: &str, messages: &[Message]) -> Result<ChatReply, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
