use crate::models::{AskRequest, AskResponse, MISSING_MESSAGE};
use crate::services::AdvisorError;
use crate::startup::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use service_core::error::AppError;

impl From<AdvisorError> for AppError {
    fn from(err: AdvisorError) -> Self {
        AppError::Processing(err.to_string())
    }
}

/// Relay one message to the advisor.
///
/// The body is read as raw bytes so that a missing or wrong `Content-Type`
/// still yields the envelope rather than an extractor rejection.
pub async fn ask(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AskResponse>, AppError> {
    let body = body.map_err(|e| {
        tracing::warn!(error = %e, "Invalid request: unreadable body");
        AppError::BadRequest(MISSING_MESSAGE.to_string())
    })?;

    tracing::info!(body = %String::from_utf8_lossy(&body), "Received request");

    let Some(request) = AskRequest::from_body(&body) else {
        tracing::warn!("Invalid request: Missing 'message'");
        return Err(AppError::BadRequest(MISSING_MESSAGE.to_string()));
    };

    match state.advisor.ask(&request.message).await {
        Ok(reply) => {
            tracing::info!(
                model = %state.advisor.model(),
                reply_len = reply.len(),
                "Response generated successfully"
            );
            Ok(Json(AskResponse::success(reply)))
        }
        Err(err) => {
            tracing::error!(error = ?err, "Error processing request: {}", err);
            Err(err.into())
        }
    }
}
