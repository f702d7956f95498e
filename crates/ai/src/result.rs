use serde::{Deserialize, Serialize};
use thiserror::Error;

use discvr_core::ProductId;

use crate::llm::LlmError;

/// Provider codes that mean "slow down".
const RATE_LIMIT_CODES: &[&str] = &["rate_limit_exceeded", "RESOURCE_EXHAUSTED"];

/// Provider codes that mean the credentials were rejected.
const AUTH_CODES: &[&str] = &["invalid_api_key", "API_KEY_INVALID", "UNAUTHENTICATED"];

/// The model's answer to an ask query.
///
/// This is the strict schema the model reply must deserialize into. It is an
/// ephemeral, per-request value; ids are not yet checked against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskResult {
    pub product_ids: Vec<ProductId>,
    pub summary: String,
}

#[derive(Debug, Error)]
pub enum AiError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// The model replied, but not with `{ productIds: [int], summary: string }`.
    #[error("model returned malformed JSON: {0}")]
    MalformedResponse(String),
}

impl AiError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Upstream signalled a rate limit (HTTP 429 or a rate-limit code).
    pub fn is_rate_limited(&self) -> bool {
        match self {
            AiError::Llm(LlmError::Api { status, code, .. }) => {
                *status == 429 || code_in(code, RATE_LIMIT_CODES)
            }
            _ => false,
        }
    }

    /// Upstream rejected our credentials, or none are configured.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            AiError::Llm(LlmError::MissingApiKey) => true,
            AiError::Llm(LlmError::Api { status, code, .. }) => {
                *status == 401 || code_in(code, AUTH_CODES)
            }
            _ => false,
        }
    }

    /// The upstream produced output we could not parse.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            AiError::MalformedResponse(_)
                | AiError::Llm(LlmError::Parse(_))
                | AiError::Llm(LlmError::EmptyResponse)
        )
    }
}

fn code_in(code: &Option<String>, known: &[&str]) -> bool {
    code.as_deref().is_some_and(|c| known.contains(&c))
}
