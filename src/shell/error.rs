use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::modules::employees::use_cases::list_employees_with_departments::handler::EnrichmentError;
use crate::modules::employees::use_cases::manage_employees::handler::ApplicationError;
use crate::shared::auth::policy::AuthorizationError;

/// Every failure the HTTP surface can return.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication required")]
    Unauthenticated,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unprocessable(String),

    /// Forwarded unchanged from the Department service.
    #[error("upstream returned {status}")]
    Upstream { status: u16, body: String },

    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: u16,
    message: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream { status, body } => {
                let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY);
                return (status, body.clone()).into_response();
            }
        };
        let message = self.to_string();
        (
            status,
            Json(ErrorBody {
                status: status.as_u16(),
                message: &message,
            }),
        )
            .into_response()
    }
}

impl From<AuthorizationError> for ApiError {
    fn from(error: AuthorizationError) -> Self {
        match error {
            AuthorizationError::Unauthenticated => ApiError::Unauthenticated,
            forbidden @ AuthorizationError::Forbidden { .. } => {
                ApiError::Forbidden(forbidden.to_string())
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        match error {
            mismatch @ ApplicationError::IdMismatch { .. } => {
                ApiError::BadRequest(mismatch.to_string())
            }
            ApplicationError::Store(e) => {
                tracing::error!(target: "database", error = %e, "employee store failure");
                ApiError::Internal
            }
        }
    }
}

impl From<EnrichmentError> for ApiError {
    fn from(error: EnrichmentError) -> Self {
        match error {
            EnrichmentError::Upstream { status, body } => ApiError::Upstream { status, body },
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}
