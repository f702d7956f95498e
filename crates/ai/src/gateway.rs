//! The AI query gateway: prompt → single upstream call → validated [`AskResult`].

use std::sync::{Arc, LazyLock};

use regex::Regex;

use discvr_products::Catalog;

use crate::llm::{GenerationConfig, LlmClient};
use crate::prompt;
use crate::result::{AiError, AskResult};

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```json\s*").expect("valid fence regex"));

/// Answers natural-language questions about the catalog.
///
/// The system instruction is rendered once at construction; the catalog is
/// immutable so it never goes stale.
pub struct AskGateway {
    llm: Arc<dyn LlmClient>,
    generation: GenerationConfig,
    system_instruction: String,
}

impl AskGateway {
    pub fn new(catalog: &Catalog, llm: Arc<dyn LlmClient>) -> Self {
        let system_instruction = prompt::system_instruction(catalog);
        Self {
            llm,
            generation: GenerationConfig::default(),
            system_instruction,
        }
    }

    pub fn with_generation_config(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// Ask the model which products match `query`.
    ///
    /// `query` must already be trimmed and non-empty. Exactly one upstream
    /// call is made; nothing is retried.
    pub async fn ask(&self, query: &str) -> Result<AskResult, AiError> {
        let completion = self
            .llm
            .complete(&self.system_instruction, query, &self.generation)
            .await?;

        let result = parse_reply(&completion.text)?;
        tracing::debug!(
            product_ids = result.product_ids.len(),
            "model reply parsed"
        );
        Ok(result)
    }
}

/// Strip markdown code fences a model may wrap around its JSON.
pub fn strip_code_fences(raw: &str) -> String {
    JSON_FENCE.replace_all(raw, "").replace("```", "").trim().to_string()
}

/// Validate raw model text into an [`AskResult`].
///
/// Any failure (empty text, invalid JSON, wrong shape) is
/// [`AiError::MalformedResponse`].
pub fn parse_reply(raw: &str) -> Result<AskResult, AiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AiError::malformed("empty response from model"));
    }

    let cleaned = strip_code_fences(raw);
    serde_json::from_str(&cleaned).map_err(|e| AiError::malformed(e.to_string()))
}
