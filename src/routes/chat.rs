//! Chat routes — JSON translation around `services::chat`.

use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::chat::{self, Turn};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
}

/// Body of `POST /api/chat`: the message box, the current turn list, and
/// the model input.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<Turn>,
    #[serde(default)]
    pub model: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub history: Vec<Turn>,
    /// New contents of the message box.
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClearResponse {
    pub history: Vec<Turn>,
}

/// `GET /api/models` — model names, empty when the inference server is unreachable.
pub async fn list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    let models = chat::list_model_names(state.ollama.as_ref()).await;
    Json(ModelsResponse { models })
}

/// `POST /api/chat` — message-box submit and Send click.
pub async fn submit(State(state): State<AppState>, Json(req): Json<SubmitRequest>) -> Json<SubmitResponse> {
    let outcome = chat::submit_message(state.ollama.as_ref(), req.message, req.history, &req.model).await;
    Json(SubmitResponse { history: outcome.history, message: outcome.message })
}

/// `POST /api/clear` — Clear Chat click.
pub async fn clear() -> Json<ClearResponse> {
    Json(ClearResponse { history: chat::clear_chat() })
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
