//! HTTP client for the Ollama REST API (`/api/tags`, `/api/generate`).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::InferenceBackend;
use crate::config::Config;
use crate::error::InferenceError;

/// `/api/generate` request body.
#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize, Debug)]
struct GenerateOptions {
    temperature: f64,
    num_predict: u32,
}

/// `/api/generate` response body. Only `response` is consumed.
#[derive(Deserialize, Debug)]
struct GenerateResponse {
    response: String,
    #[serde(default)]
    done: bool,
}

/// `/api/tags` response body.
#[derive(Deserialize, Debug)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Deserialize, Debug)]
struct ModelTag {
    name: String,
}

/// Ollama client bound to one endpoint with a fixed per-request timeout.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    endpoint: String,
    timeout_secs: u64,
}

impl OllamaClient {
    pub fn new(config: &Config) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| InferenceError::Unreachable {
                endpoint: config.endpoint.clone(),
                source: e,
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout.as_secs(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    fn transport_error(&self, e: reqwest::Error) -> InferenceError {
        if e.is_timeout() {
            InferenceError::Timeout(self.timeout_secs)
        } else {
            InferenceError::Unreachable {
                endpoint: self.endpoint.clone(),
                source: e,
            }
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, InferenceError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(InferenceError::HttpStatus { status, body })
    }
}

#[async_trait]
impl InferenceBackend for OllamaClient {
    async fn list_models(&self) -> Result<Vec<String>, InferenceError> {
        let url = self.url("/api/tags");
        debug!(url = %url, "Listing Ollama models");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let response = Self::check_status(response).await?;

        let tags: TagsResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                self.transport_error(e)
            } else {
                InferenceError::MalformedResponse(e.to_string())
            }
        })?;

        debug!(count = tags.models.len(), "Received model list");
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        temperature: f64,
        max_tokens: u32,
    ) -> Result<String, InferenceError> {
        let url = self.url("/api/generate");
        let request = GenerateRequest {
            model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature,
                num_predict: max_tokens,
            },
        };

        info!(url = %url, model = %model, "Sending generate request to Ollama");
        debug!(prompt_len = prompt.len(), temperature, max_tokens, "Built generate payload");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let response = Self::check_status(response).await?;

        let body: GenerateResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                self.transport_error(e)
            } else {
                InferenceError::MalformedResponse(e.to_string())
            }
        })?;

        debug!(
            response_len = body.response.len(),
            done = body.done,
            "Received Ollama response"
        );
        Ok(body.response.trim().to_string())
    }
}
