//! Mock provider implementation for testing.

use super::{FinishReason, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What the mock answers on every call.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Reply with this text.
    Reply(String),
    /// Succeed but carry no text payload.
    NoText,
    /// Fail with an API error carrying this message.
    Fail(String),
}

/// Mock text provider that counts its calls.
pub struct MockTextProvider {
    behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockTextProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Reply(text.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fail(message.into()))
    }

    /// Number of `generate` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let text = match &self.behavior {
            MockBehavior::Reply(text) => Some(text.clone()),
            MockBehavior::NoText => None,
            MockBehavior::Fail(message) => return Err(ProviderError::ApiError(message.clone())),
        };

        Ok(ProviderResponse {
            text,
            input_tokens: i32::try_from(prompt.len() / 4).unwrap_or(i32::MAX),
            output_tokens: 10,
            finish_reason: FinishReason::Complete,
        })
    }

    fn model(&self) -> &str {
        "mock"
    }
}
