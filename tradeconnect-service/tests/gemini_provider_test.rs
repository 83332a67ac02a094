//! Gemini client tests against a local mock of the REST API.

use secrecy::Secret;
use serde_json::{json, Value};
use tradeconnect_service::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use tradeconnect_service::services::providers::{ProviderError, TextProvider};
use tradeconnect_service::services::EXPORT_ADVISOR_PERSONA;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/models/gemini-2.0-flash:generateContent";

fn provider_for(server: &MockServer) -> GeminiTextProvider {
    GeminiTextProvider::new(GeminiConfig {
        api_key: Secret::new("test-key".to_string()),
        model: "gemini-2.0-flash".to_string(),
        system_instruction: EXPORT_ADVISOR_PERSONA.to_string(),
        base_url: server.uri(),
    })
    .expect("Failed to create provider")
}

#[tokio::test]
async fn sends_persona_and_single_user_turn() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Register with customs first."}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 40, "candidatesTokenCount": 6}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider_for(&server)
        .generate("How do I export coffee to the EU?")
        .await
        .unwrap();

    assert_eq!(response.text.as_deref(), Some("Register with customs first."));
    assert_eq!(response.input_tokens, 40);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].url.as_str().contains("test-key"));

    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        sent["systemInstruction"]["parts"][0]["text"],
        EXPORT_ADVISOR_PERSONA
    );
    assert_eq!(
        sent["contents"],
        json!([{"role": "user", "parts": [{"text": "How do I export coffee to the EU?"}]}])
    );
}

#[tokio::test]
async fn rate_limit_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let result = provider_for(&server).generate("Hi").await;
    assert!(matches!(result, Err(ProviderError::RateLimited)));
}

#[tokio::test]
async fn api_error_carries_status_and_message_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = provider_for(&server).generate("Hi").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "API error: Gemini API error 400 Bad Request: API key not valid."
    );
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = provider_for(&server).generate("Hi").await;
    assert!(matches!(result, Err(ProviderError::InvalidResponse(_))));
}

#[tokio::test]
async fn unreachable_api_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = GeminiTextProvider::new(GeminiConfig {
        api_key: Secret::new("test-key".to_string()),
        model: "gemini-2.0-flash".to_string(),
        system_instruction: EXPORT_ADVISOR_PERSONA.to_string(),
        base_url: format!("http://{}", addr),
    })
    .unwrap();

    let result = provider.generate("Hi").await;
    assert!(matches!(result, Err(ProviderError::Network(_))));
}
