use service_core::observability::{init_tracing, LogSettings};
use tradeconnect_service::config::TradeConnectConfig;
use tradeconnect_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let log_settings = LogSettings::load();
    init_tracing(
        "tradeconnect-service",
        &log_settings.log_level,
        log_settings.otlp_endpoint.as_deref(),
    );

    let config = TradeConnectConfig::load().map_err(|e| {
        tracing::error!(severity = "critical", "Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!(severity = "critical", "Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
