//! Chat service — turn list → Ollama messages → one appended turn.
//!
//! DESIGN
//! ======
//! The conversation lives in the browser and is posted back with every
//! request, so every function here is a pure transformation of the turn
//! list it is given plus at most one call through [`OllamaApi`]. Failures
//! never escape as errors: listing degrades to an empty list and chat
//! failures become the bot text of the appended turn.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm::{LlmError, Message, OllamaApi};

/// Bot text when the model name is blank.
pub const SELECT_MODEL_REPLY: &str = "Please select a model first.";

/// Bot text when a 200 reply carries no `message.content`.
pub const EMPTY_REPLY_FALLBACK: &str = "Sorry, I couldn't generate a response.";

// =============================================================================
// TURN
// =============================================================================

/// One (user message, bot reply) pair. An empty `bot` means the reply is pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub user: String,
    #[serde(default)]
    pub bot: String,
}

impl Turn {
    #[must_use]
    pub fn new(user: impl Into<String>, bot: impl Into<String>) -> Self {
        Self { user: user.into(), bot: bot.into() }
    }
}

/// Result of a submit: the new turn list and the text left in the message box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub history: Vec<Turn>,
    pub message: String,
}

// =============================================================================
// MODEL LISTING
// =============================================================================

/// Names of the models the inference server offers, in server order.
/// Any failure yields an empty list.
pub async fn list_model_names(api: &dyn OllamaApi) -> Vec<String> {
    match api.list_models().await {
        Ok(models) => models.into_iter().map(|m| m.name).collect(),
        Err(e) => {
            warn!(error = %e, "model listing failed");
            Vec::new()
        }
    }
}

// =============================================================================
// RESPONDER
// =============================================================================

/// Flatten prior turns into role-tagged messages and append `next` as the
/// trailing user message. Empty bot replies are skipped.
#[must_use]
pub fn build_messages(history: &[Turn], next: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() * 2 + 1);
    for turn in history {
        messages.push(Message::user(turn.user.clone()));
        if !turn.bot.is_empty() {
            messages.push(Message::assistant(turn.bot.clone()));
        }
    }
    messages.push(Message::user(next));
    messages
}

/// Bot text shown for a failed chat request.
#[must_use]
pub fn error_reply(err: &LlmError) -> String {
    match err {
        LlmError::ApiResponse { status, body } => format!("Error: {status} - {body}"),
        LlmError::ApiRequest(msg) | LlmError::ApiParse(msg) => format!("Connection error: {msg}"),
        other => format!("Connection error: {other}"),
    }
}

/// Ask the model for a reply to `message` and return `history` with exactly
/// one new turn appended.
pub async fn respond(api: &dyn OllamaApi, message: &str, mut history: Vec<Turn>, model: &str) -> Vec<Turn> {
    let model = model.trim();
    if model.is_empty() {
        history.push(Turn::new(message, SELECT_MODEL_REPLY));
        return history;
    }

    let messages = build_messages(&history, message);
    let reply = match api.chat(model, &messages).await {
        Ok(reply) => reply
            .content
            .unwrap_or_else(|| EMPTY_REPLY_FALLBACK.to_string()),
        Err(e) => {
            warn!(error = %e, model, "chat request failed");
            error_reply(&e)
        }
    };

    history.push(Turn::new(message, reply));
    history
}

// =============================================================================
// UI EVENTS
// =============================================================================

/// Message-box submission and Send click. A blank message leaves both the
/// history and the message box untouched; otherwise the box is cleared.
pub async fn submit_message(api: &dyn OllamaApi, message: String, history: Vec<Turn>, model: &str) -> SubmitOutcome {
    if message.trim().is_empty() {
        return SubmitOutcome { history, message };
    }
    let history = respond(api, &message, history, model).await;
    SubmitOutcome { history, message: String::new() }
}

/// Clear Chat click.
#[must_use]
pub fn clear_chat() -> Vec<Turn> {
    Vec::new()
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
