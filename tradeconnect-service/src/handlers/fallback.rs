use axum::{
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde_json::json;

/// Any method or path outside the public surface.
pub async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    tracing::warn!(%method, %uri, "Endpoint not found");
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "status": "error",
            "message": "Endpoint not found",
            "available_endpoints": {
                "/": "Root information",
                "/ask": "POST export advice",
                "/test": "GET health check"
            }
        })),
    )
}
