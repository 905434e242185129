//! Mock provider for tests.

use super::{InferenceProvider, ProviderError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    ConnectionFailure,
    NonSuccessStatus(u16),
    Timeout,
    InvalidResponse,
}

/// Returns a canned reply and remembers the prompts it was given.
pub struct MockInferenceProvider {
    model: String,
    reply: MockReply,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockInferenceProvider {
    pub fn new(model: &str, reply: MockReply) -> Self {
        Self {
            model: model.to_string(),
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying_with(text: &str) -> Self {
        Self::new("mock-model", MockReply::Text(text.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts
            .lock()
            .ok()
            .and_then(|prompts| prompts.last().cloned())
    }
}

#[async_trait]
impl InferenceProvider for MockInferenceProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match &self.reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::ConnectionFailure => Err(ProviderError::ConnectionFailure(
                "connection refused".to_string(),
            )),
            MockReply::NonSuccessStatus(status) => Err(ProviderError::NonSuccessStatus {
                status: *status,
                body: "mock upstream error".to_string(),
            }),
            MockReply::Timeout => Err(ProviderError::Timeout(Duration::from_secs(90))),
            MockReply::InvalidResponse => Err(ProviderError::InvalidResponse(
                "missing field `response`".to_string(),
            )),
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}
