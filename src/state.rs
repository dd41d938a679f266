//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Conversations are held by the browser, so the only shared thing is the
//! inference-server client.

use std::sync::Arc;

use crate::llm::OllamaApi;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub ollama: Arc<dyn OllamaApi>,
}

impl AppState {
    #[must_use]
    pub fn new(ollama: Arc<dyn OllamaApi>) -> Self {
        Self { ollama }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use crate::llm::types::{ChatReply, LlmError, Message, ModelDescriptor};

    /// Scripted stand-in for the Ollama client. Records every chat call.
    pub struct MockOllama {
        models: Mutex<Option<Result<Vec<ModelDescriptor>, LlmError>>>,
        replies: Mutex<VecDeque<Result<ChatReply, LlmError>>>,
        pub calls: Mutex<Vec<(String, Vec<Message>)>>,
    }

    impl MockOllama {
        #[must_use]
        pub fn new() -> Self {
            Self { models: Mutex::new(None), replies: Mutex::new(VecDeque::new()), calls: Mutex::new(Vec::new()) }
        }

        #[must_use]
        pub fn with_models(self, names: &[&str]) -> Self {
            let models = names
                .iter()
                .map(|n| ModelDescriptor { name: (*n).to_string() })
                .collect();
            *self.models.lock().unwrap() = Some(Ok(models));
            self
        }

        #[must_use]
        pub fn with_models_error(self, err: LlmError) -> Self {
            *self.models.lock().unwrap() = Some(Err(err));
            self
        }

        #[must_use]
        pub fn with_reply(self, reply: Result<ChatReply, LlmError>) -> Self {
            self.replies.lock().unwrap().push_back(reply);
            self
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl Default for MockOllama {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait::async_trait]
    impl OllamaApi for MockOllama {
        async fn list_models(&self) -> Result<Vec<ModelDescriptor>, LlmError> {
            self.models
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn chat(&self, model: &str, messages: &[Message]) -> Result<ChatReply, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((model.to_string(), messages.to_vec()));
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(ChatReply { content: Some("done".into()) }))
        }
    }

    /// Reply carrying `text` as `message.content`.
    #[must_use]
    pub fn reply(text: &str) -> Result<ChatReply, LlmError> {
        Ok(ChatReply { content: Some(text.to_string()) })
    }

    /// Create a test `AppState` around a mock client.
    #[must_use]
    pub fn test_app_state(mock: Arc<MockOllama>) -> AppState {
        AppState::new(mock)
    }
}
