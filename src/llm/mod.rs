//! LLM — client for the local Ollama inference server.
//!
//! DESIGN
//! ======
//! Handlers never talk to `reqwest` directly; they hold an
//! `Arc<dyn OllamaApi>` so tests can swap in a scripted mock. The only
//! concrete implementation is [`ollama::OllamaClient`].

pub mod config;
pub mod ollama;
pub mod types;

pub use config::OllamaConfig;
pub use ollama::OllamaClient;
pub use types::{LlmError, Message, OllamaApi};
