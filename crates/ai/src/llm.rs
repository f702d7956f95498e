//! LLM client abstraction.
//!
//! [`LlmClient`] is the seam between the ask gateway and the upstream model.
//! Production uses [`GeminiClient`](crate::gemini::GeminiClient); tests plug in
//! scripted clients.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while talking to the upstream model.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API key was configured; no request was sent.
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    /// The upstream API answered with a non-success status.
    #[error("upstream API error {status}: {message}")]
    Api {
        status: u16,
        /// Provider error code (e.g. `RESOURCE_EXHAUSTED`, `API_KEY_INVALID`).
        code: Option<String>,
        message: String,
    },

    /// Network or transport failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The upstream response envelope was not the JSON we expected.
    #[error("invalid JSON envelope from upstream: {0}")]
    Parse(String),

    /// Model returned no text content.
    #[error("model returned empty response")]
    EmptyResponse,
}

/// The result of a successful completion request.
#[derive(Debug, Clone)]
pub struct Completion {
    /// The generated text from the model.
    pub text: String,
}

/// Sampling and output constraints sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

impl Default for GenerationConfig {
    /// Low temperature, short output, JSON-only.
    fn default() -> Self {
        Self {
            temperature: 0.3,
            max_output_tokens: 300,
            response_mime_type: Some("application/json".to_string()),
        }
    }
}

/// Generic interface for LLM clients.
///
/// One call is one upstream request; implementations must not retry.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate a completion from a system instruction and a single user turn.
    async fn complete(
        &self,
        system: &str,
        user: &str,
        config: &GenerationConfig,
    ) -> Result<Completion, LlmError>;
}

/// Scripted client for unit tests. Returns pre-programmed results in FIFO order.
#[cfg(test)]
pub(crate) struct MockLlmClient {
    pub responses: std::sync::Mutex<std::collections::VecDeque<Result<String, LlmError>>>,
    pub calls: std::sync::Mutex<Vec<(String, String, GenerationConfig)>>,
}

#[cfg(test)]
impl MockLlmClient {
    pub fn replying(texts: Vec<&str>) -> Self {
        Self::new(texts.into_iter().map(|t| Ok(t.to_string())).collect())
    }

    pub fn new(responses: Vec<Result<String, LlmError>>) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses.into()),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[cfg(test)]
#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        config: &GenerationConfig,
    ) -> Result<Completion, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string(), config.clone()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("MockLlmClient: no more responses available")
            .map(|text| Completion { text })
    }
}
