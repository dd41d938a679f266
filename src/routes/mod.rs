//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! JSON endpoints live under `/api`. Everything else falls through to the
//! static chat page, so `GET /` serves `index.html` from the static dir.

pub mod chat;

use std::path::Path;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Upper bound on a `POST /api/chat` body. The whole turn list rides along
/// with every submit, so axum's 2 MB default is far too small.
pub const MAX_CHAT_BODY_BYTES: usize = 64 * 1024 * 1024;

/// JSON routes used by the chat page.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/models", get(chat::list_models))
        .route("/api/chat", post(chat::submit))
        .route("/api/clear", post(chat::clear))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(MAX_CHAT_BODY_BYTES))
        .with_state(state)
}

/// Full application: API routes plus the static page at `/`.
#[must_use]
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let page = ServeDir::new(static_dir).append_index_html_on_directories(true);

    api_routes(state)
        .fallback_service(page)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
