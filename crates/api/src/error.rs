use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ccrp_core::error::CoreError;
use ccrp_core::identity::IdentityError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`IdentityError`] for failures
/// reported by the identity collaborator. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `ccrp_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the identity collaborator.
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            },

            // --- Identity collaborator errors ---
            AppError::Identity(err) => match err {
                IdentityError::Unavailable(msg) => {
                    tracing::error!(error = %msg, "Identity service unavailable");
                    (
                        StatusCode::BAD_GATEWAY,
                        "IDENTITY_UNAVAILABLE",
                        "The identity service is currently unavailable. Please try again."
                            .to_string(),
                    )
                }
                IdentityError::Rejected(msg) => (
                    StatusCode::UNAUTHORIZED,
                    "IDENTITY_REJECTED",
                    msg.clone(),
                ),
            },
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
