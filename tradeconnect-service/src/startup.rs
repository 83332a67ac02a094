//! Application startup and lifecycle management.

use crate::config::{DeploymentConfig, TradeConnectConfig};
use crate::handlers::{ask, liveness, not_found, root};
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use crate::services::{Advisor, EXPORT_ADVISOR_PERSONA};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use service_core::error::AppError;
use service_core::middleware::{catch_panic_layer, http_trace_layer, request_id_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Shared application state. Built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub advisor: Advisor,
    pub deployment: DeploymentConfig,
}

/// Build the HTTP router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(root).fallback(not_found))
        .route("/test", get(liveness).fallback(not_found))
        .route(
            "/ask",
            post(ask)
                .fallback(not_found)
                .layer(DefaultBodyLimit::disable()),
        )
        .fallback(not_found)
        .layer(catch_panic_layer());

    if let Some(cors) = cors_layer(&state.deployment.cors_allowed_origins) {
        router = router.layer(cors);
    }

    router
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}': {}", o, e);
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application against the Gemini API.
    pub async fn build(config: TradeConnectConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            api_key: config.google.api_key.clone(),
            model: config.models.text_model.clone(),
            system_instruction: EXPORT_ADVISOR_PERSONA.to_string(),
            base_url: config.models.api_base_url.clone(),
        };
        let provider = GeminiTextProvider::new(gemini_config).map_err(|e| {
            tracing::error!("Model initialization error: {}", e);
            AppError::ConfigError(anyhow::Error::new(e))
        })?;

        tracing::info!(
            model = %config.models.text_model,
            "Initialized Gemini text provider"
        );

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build the application around an already constructed provider.
    pub async fn build_with_provider(
        config: TradeConnectConfig,
        provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            advisor: Advisor::new(provider),
            deployment: config.deployment.clone(),
        };

        // Port 0 picks a random port (tests)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("TradeConnect API listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until Ctrl-C or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
