//! Local inference backend: the Ollama HTTP client and model selection helpers.

pub mod models;
pub mod ollama;

pub use models::{MODEL_HINTS, describe_model, model_annotation, resolve_model_selection};
pub use ollama::OllamaClient;

use async_trait::async_trait;

use crate::error::InferenceError;

/// Operations the workflow needs from an inference server.
///
/// This abstraction allows mocking the HTTP backend in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Names of the models installed on the server.
    async fn list_models(&self) -> Result<Vec<String>, InferenceError>;

    /// Run one non-streaming completion and return the trimmed text.
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        temperature: f64,
        max_tokens: u32,
    ) -> Result<String, InferenceError>;
}
