use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chatbot_core::error::CoreError;

/// Body text sent with 402 responses.
pub const REQUIRES_HIGHER_PLAN_BODY: &str = "Requires Higher Plan";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the infrastructure failures
/// a handler can hit. Implements [`IntoResponse`]; this is the only place
/// errors are mapped to status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `chatbot_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body was not valid JSON.
    #[error("Malformed JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The request body could not be read (client abort, size limit).
    #[error("Failed to read request body: {0}")]
    BodyRead(#[from] axum::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // --- CoreError variants ---
            AppError::Core(CoreError::Forbidden(reason)) => {
                tracing::debug!(%reason, "Request forbidden");
                StatusCode::FORBIDDEN.into_response()
            }
            AppError::Core(CoreError::RequiresHigherPlan) => {
                tracing::info!("Request rejected by plan gate");
                (StatusCode::PAYMENT_REQUIRED, REQUIRES_HIGHER_PLAN_BODY).into_response()
            }
            AppError::Core(CoreError::Validation(issues)) => {
                tracing::info!(issue_count = issues.len(), "Request body failed validation");
                (StatusCode::UNPROCESSABLE_ENTITY, Json(issues)).into_response()
            }
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }

            // --- Infrastructure errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            AppError::MalformedBody(err) => {
                tracing::error!(error = %err, "Malformed request body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            AppError::BodyRead(err) => {
                tracing::error!(error = %err, "Failed to read request body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
