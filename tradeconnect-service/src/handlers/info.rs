use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Service banner listing the public endpoints.
pub async fn root() -> impl IntoResponse {
    tracing::info!("Root information requested");
    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "TradeConnect API",
            "endpoints": {
                "/ask": "POST endpoint for export advice",
                "/test": "GET health check endpoint"
            },
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Static liveness probe. Never touches the model.
pub async fn liveness(State(state): State<AppState>) -> impl IntoResponse {
    tracing::info!("Liveness check requested");
    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Application is live",
            "deployment": state.deployment.label
        })),
    )
}
