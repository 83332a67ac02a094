//! Text generation provider abstractions and implementations.
//!
//! The advisor talks to the remote model only through [`TextProvider`], so the
//! Gemini client can be swapped for the mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result of a provider call.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Generated text, if the model produced any.
    pub text: Option<String>,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,

    pub finish_reason: FinishReason,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    ContentFilter,
    Other,
}

impl FinishReason {
    pub fn from_api(reason: Option<&str>) -> Self {
        match reason {
            None | Some("STOP") => FinishReason::Complete,
            Some("MAX_TOKENS") => FinishReason::Length,
            Some("SAFETY") | Some("PROHIBITED_CONTENT") | Some("BLOCKLIST") => {
                FinishReason::ContentFilter
            }
            Some(_) => FinishReason::Other,
        }
    }
}

/// A remote service that turns a single user turn into text.
///
/// Implementations carry their system instruction from construction; callers
/// only ever pass the user's prompt.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a reply to `prompt`. Exactly one remote attempt is made.
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;

    /// Model identifier, for logs.
    fn model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_reason_mapping() {
        assert_eq!(FinishReason::from_api(Some("STOP")), FinishReason::Complete);
        assert_eq!(FinishReason::from_api(None), FinishReason::Complete);
        assert_eq!(FinishReason::from_api(Some("MAX_TOKENS")), FinishReason::Length);
        assert_eq!(
            FinishReason::from_api(Some("SAFETY")),
            FinishReason::ContentFilter
        );
        assert_eq!(FinishReason::from_api(Some("RECITATION")), FinishReason::Other);
    }
}
