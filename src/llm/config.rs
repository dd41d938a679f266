//! Inference-server configuration parsed from environment variables.

use super::types::LlmError;

pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Optional HTTP timeouts. `None` keeps the `reqwest` default (no limit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LlmTimeouts {
    pub request_secs: Option<u64>,
    pub connect_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllamaConfig {
    pub base_url: String,
    pub timeouts: LlmTimeouts,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_OLLAMA_BASE_URL.to_string(), timeouts: LlmTimeouts::default() }
    }
}

impl OllamaConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `OLLAMA_BASE_URL`: default `http://localhost:11434`
    /// - `OLLAMA_REQUEST_TIMEOUT_SECS`: unset means no request timeout
    /// - `OLLAMA_CONNECT_TIMEOUT_SECS`: unset means no connect timeout
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigParse`] if a timeout is not a whole number.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`OllamaConfig::from_env`] but reads values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigParse`] if a timeout is not a whole number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LlmError> {
        let base_url = lookup("OLLAMA_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OLLAMA_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        let timeouts = LlmTimeouts {
            request_secs: parse_secs("OLLAMA_REQUEST_TIMEOUT_SECS", lookup("OLLAMA_REQUEST_TIMEOUT_SECS"))?,
            connect_secs: parse_secs("OLLAMA_CONNECT_TIMEOUT_SECS", lookup("OLLAMA_CONNECT_TIMEOUT_SECS"))?,
        };

        Ok(Self { base_url, timeouts })
    }
}

fn parse_secs(key: &str, raw: Option<String>) -> Result<Option<u64>, LlmError> {
    match raw {
        None => Ok(None),
        Some(v) => v
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| LlmError::ConfigParse(format!("{key} must be a whole number of seconds, got '{v}'"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
