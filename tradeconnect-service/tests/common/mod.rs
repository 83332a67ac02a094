//! Shared setup for tradeconnect-service integration tests.

#![allow(dead_code)]

use service_core::config::Config;
use std::sync::Arc;
use tradeconnect_service::config::TradeConnectConfig;
use tradeconnect_service::services::providers::TextProvider;
use tradeconnect_service::services::Advisor;
use tradeconnect_service::startup::{Application, AppState};

/// Test configuration listening on a random port.
pub fn test_config() -> TradeConnectConfig {
    TradeConnectConfig::from_lookup(Config { port: 0 }, |key| match key {
        "GOOGLE_API_KEY" => Some("test-api-key".to_string()),
        "DEPLOYMENT_LABEL" => Some("Test".to_string()),
        _ => None,
    })
    .expect("Failed to build test config")
}

pub fn test_state(provider: Arc<dyn TextProvider>) -> AppState {
    AppState {
        advisor: Advisor::new(provider),
        deployment: test_config().deployment,
    }
}

/// Spawn the application on a random port and return the port number.
pub async fn spawn_app(provider: Arc<dyn TextProvider>) -> u16 {
    let app = Application::build_with_provider(test_config(), provider)
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    port
}
