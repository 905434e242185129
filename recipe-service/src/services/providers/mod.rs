//! Inference provider abstraction.
//!
//! The relay talks to a single text-generation backend. The trait keeps the
//! handler independent of the transport so tests can swap in a mock.

pub mod mock;
pub mod ollama;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Why a generation call failed.
///
/// Callers see one generic message for all of these; the kind is kept for
/// logging and tests.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Connection to inference endpoint failed: {0}")]
    ConnectionFailure(String),

    #[error("Inference endpoint returned status {status}: {body}")]
    NonSuccessStatus { status: u16, body: String },

    #[error("Inference request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Inference endpoint returned an unreadable response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::ConnectionFailure(_) => "connection_failure",
            ProviderError::NonSuccessStatus { .. } => "non_success_status",
            ProviderError::Timeout(_) => "timeout",
            ProviderError::InvalidResponse(_) => "invalid_response",
        }
    }
}

#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Sends one non-streaming prompt and returns the raw generated text.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Model identifier sent with every request.
    fn model(&self) -> &str;
}
