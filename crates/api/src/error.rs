use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pizzeria_core::error::CoreError;
use serde_json::json;

/// The only message a client ever sees for a rejected write.
pub const VALIDATION_ERRORS: &str = "validation errors";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the API's JSON error bodies:
///
/// - `{"error": "<Entity> not found"}` for missing entities
/// - `{"errors": ["validation errors"]}` for every rejected write
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `pizzeria_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A path that matched a route pattern but not its parameter types.
    #[error("Route not found")]
    RouteNotFound,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Turn any failure into the uniform validation error.
    ///
    /// The reason is logged and then discarded.
    pub fn rejected(reason: impl std::fmt::Display) -> Self {
        tracing::debug!(reason = %reason, "Rejected write");
        AppError::Core(CoreError::Validation(reason.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, json!({ "error": format!("{entity} not found") }))
                }
                CoreError::Validation(_) => validation_failure(),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::RouteNotFound => not_found(),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn validation_failure() -> (StatusCode, serde_json::Value) {
    (StatusCode::BAD_REQUEST, json!({ "errors": [VALIDATION_ERRORS] }))
}

fn not_found() -> (StatusCode, serde_json::Value) {
    (StatusCode::NOT_FOUND, json!({ "error": "Not found" }))
}

fn internal_failure() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "An internal error occurred" }),
    )
}

/// Classify a sqlx error into an HTTP status and body.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, serde_json::Value) {
    match err {
        sqlx::Error::RowNotFound => not_found(),
        other => {
            tracing::error!(error = %other, "Database error");
            internal_failure()
        }
    }
}
