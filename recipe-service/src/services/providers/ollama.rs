//! Ollama `/api/generate` client.
//!
//! One non-streaming POST per prompt, bounded by the configured timeout.

use super::{InferenceProvider, ProviderError};
use crate::config::InferenceConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub struct OllamaProvider {
    config: InferenceConfig,
    client: Client,
}

impl OllamaProvider {
    pub fn new(config: InferenceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, client })
    }

    fn classify(&self, err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout(self.config.timeout)
        } else if err.is_decode() {
            ProviderError::InvalidResponse(err.to_string())
        } else {
            ProviderError::ConnectionFailure(err.to_string())
        }
    }
}

#[async_trait]
impl InferenceProvider for OllamaProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };

        tracing::debug!(
            model = %self.config.model,
            url = %self.config.url,
            prompt_len = prompt.len(),
            "Sending request to inference endpoint"
        );

        let response = self
            .client
            .post(&self.config.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::NonSuccessStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        let envelope: GenerateResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        tracing::debug!(
            model = %self.config.model,
            response_len = envelope.response.len(),
            "Inference endpoint responded"
        );

        Ok(envelope.response)
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}
