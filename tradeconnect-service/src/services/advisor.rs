//! The export advisor: a persona-bound view over a [`TextProvider`].

use crate::services::providers::{ProviderError, TextProvider};
use std::sync::Arc;
use thiserror::Error;

/// System instruction given to the model once, when the provider is built.
pub const EXPORT_ADVISOR_PERSONA: &str = concat!(
    "You are an experienced export advisor serving an exporters' community. ",
    "Always answer with knowledge and insight about international trade, product exports, ",
    "market analysis, logistics, documentation and regulation. ",
    "Be helpful and professional. Even when the user's question is unclear, relate your answer to exporting. ",
    "Do not use markdown, bullet points, asterisks or any formatting symbols. ",
    "Respond in plain text only. ",
    "Keep a polite, concise tone. Avoid casual language and jokes. ",
    "Do not answer questions unrelated to exporting or international trade; steer the conversation back to relevant topics. ",
    "If the user's question is ambiguous, ask a clarifying question while still offering useful trade information. ",
    "If a geographic context is mentioned (for example Indonesia, the European Union or the United States), ",
    "give region-specific regulations or opportunities where possible."
);

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("Model did not return a text response")]
    NoTextReply,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Answers one message per call. Cheap to clone; the provider is shared.
#[derive(Clone)]
pub struct Advisor {
    provider: Arc<dyn TextProvider>,
}

impl Advisor {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Forward `message` as a single user turn and return the reply verbatim.
    pub async fn ask(&self, message: &str) -> Result<String, AdvisorError> {
        let response = self.provider.generate(message).await?;

        tracing::debug!(
            model = %self.provider.model(),
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            finish_reason = ?response.finish_reason,
            "Advisor reply generated"
        );

        response.text.ok_or(AdvisorError::NoTextReply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::mock::{MockBehavior, MockTextProvider};

    #[tokio::test]
    async fn reply_is_returned_verbatim() {
        let provider = Arc::new(MockTextProvider::replying("**Incoterms** matter."));
        let advisor = Advisor::new(provider.clone());

        let reply = advisor.ask("How do I ship coffee?").await.unwrap();

        assert_eq!(reply, "**Incoterms** matter.");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn missing_text_is_an_error() {
        let advisor = Advisor::new(Arc::new(MockTextProvider::new(MockBehavior::NoText)));

        let err = advisor.ask("Hello").await.unwrap_err();

        assert!(matches!(err, AdvisorError::NoTextReply));
        assert_eq!(err.to_string(), "Model did not return a text response");
    }

    #[tokio::test]
    async fn provider_failure_keeps_its_description() {
        let advisor = Advisor::new(Arc::new(MockTextProvider::failing("quota exhausted")));

        let err = advisor.ask("Hello").await.unwrap_err();

        assert_eq!(err.to_string(), "API error: quota exhausted");
    }
}
