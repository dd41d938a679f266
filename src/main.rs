mod config;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let server = config::ServerConfig::from_env().expect("invalid server configuration");
    let ollama_config = llm::OllamaConfig::from_env().expect("invalid Ollama configuration");
    let ollama = llm::OllamaClient::new(ollama_config).expect("HTTP client init failed");
    tracing::info!(base_url = ollama.base_url(), "Ollama client initialized");

    let state = state::AppState::new(Arc::new(ollama));
    let app = routes::app(state, &server.static_dir);

    let addr = server.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, static_dir = %server.static_dir.display(), "ollama-chat listening");
    axum::serve(listener, app).await.expect("server failed");
}
