//! `discvr-ai`
//!
//! **Responsibility:** the natural-language "ask" path.
//!
//! - Builds the catalog-grounded prompt.
//! - Calls the upstream model through the [`LlmClient`] seam (Gemini in production).
//! - Validates the model's JSON reply into an [`AskResult`].
//!
//! It never mutates the catalog and never retries.

pub mod gateway;
pub mod gemini;
pub mod llm;
pub mod prompt;
pub mod result;

pub use gateway::{AskGateway, parse_reply, strip_code_fences};
pub use gemini::{GeminiClient, GeminiConfig};
pub use llm::{Completion, GenerationConfig, LlmClient, LlmError};
pub use result::{AiError, AskResult};
