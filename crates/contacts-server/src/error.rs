//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the error type for all handlers. It implements
//! `axum::response::IntoResponse`. A rejected form comes back as a rendered
//! HTML fragment so the client can swap it in place; other errors carry an
//! empty body.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use contacts_core::RegistryError;

use crate::render;
use crate::schema::contacts::{FormData, DUPLICATE_EMAIL_MESSAGE};

/// Handler errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed request input (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Form input rejected; re-render the form (422).
    #[error("invalid form")]
    InvalidForm(FormData),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    /// Pre-fills a rejected form with the values the client submitted.
    ///
    /// Other variants pass through unchanged.
    pub fn with_submitted(self, name: &str, email: &str) -> Self {
        match self {
            ApiError::InvalidForm(form) => ApiError::InvalidForm(form.with_values(name, email)),
            other => other,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST.into_response(),
            ApiError::InvalidForm(form) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render::form_fragment(&form)),
            )
                .into_response(),
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::DuplicateEmail { .. } => {
                ApiError::InvalidForm(FormData::new().with_error("email", DUPLICATE_EMAIL_MESSAGE))
            }
        }
    }
}
