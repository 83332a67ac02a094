//! Gemini AI provider implementation.
//!
//! Calls the `generateContent` REST method with a system instruction fixed at
//! construction time and the caller's message as a single user turn.

use super::{FinishReason, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Header carrying the API key. Keeping the key out of the URL keeps it out
/// of `reqwest` error messages as well.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Secret<String>,
    pub model: String,
    pub system_instruction: String,
    /// API root, e.g. `https://generativelanguage.googleapis.com/v1beta`.
    pub base_url: String,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
    system_instruction: Content,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        if config.api_key.expose_secret().is_empty() {
            return Err(ProviderError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        }

        // No timeout: a call runs until the API answers or the connection fails.
        let client = Client::builder().build().map_err(ProviderError::Network)?;

        let system_instruction = Content {
            role: None,
            parts: vec![Part {
                text: Some(config.system_instruction.clone()),
            }],
        };

        Ok(Self {
            config,
            client,
            system_instruction,
        })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        let request = GenerateContentRequest {
            system_instruction: &self.system_instruction,
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url())
            .header(API_KEY_HEADER, self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(ProviderError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(ProviderError::RateLimited);
            }

            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status,
                api_error_message(&error_text)
            )));
        }

        let body = response.text().await.map_err(ProviderError::Network)?;
        let api_response: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        interpret(api_response)
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

fn interpret(api_response: GenerateContentResponse) -> Result<ProviderResponse, ProviderError> {
    let candidate = api_response.candidates.first();

    if candidate.is_none()
        && api_response
            .prompt_feedback
            .as_ref()
            .is_some_and(|f| f.block_reason.is_some())
    {
        return Err(ProviderError::ContentFiltered);
    }

    let finish_reason = FinishReason::from_api(
        candidate.and_then(|c| c.finish_reason.as_deref()),
    );
    if finish_reason == FinishReason::ContentFilter {
        return Err(ProviderError::ContentFiltered);
    }

    // The reply is every text part of the first candidate, in order.
    let text = candidate
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect::<Vec<_>>()
        })
        .filter(|texts| !texts.is_empty())
        .map(|texts| texts.concat());

    let usage = api_response.usage_metadata.unwrap_or_default();

    Ok(ProviderResponse {
        text,
        input_tokens: usage.prompt_token_count.unwrap_or(0),
        output_tokens: usage.candidates_token_count.unwrap_or(0),
        finish_reason,
    })
}

/// Pull `error.message` out of a Gemini error body, else return it as is.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.to_string())
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: &'a Content,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

/// Only text parts are produced or read; other part kinds deserialize with
/// `text: None`.
#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<i32>,
    candidates_token_count: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}
