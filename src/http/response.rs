//! Error responses.
//!
//! # Responsibilities
//! - Map handler failures to status codes and plain-text bodies
//! - Keep upstream failure detail out of responses
//!
//! # Design Decisions
//! - Validation failures are 400 with a message specific to the check
//! - Every upstream failure collapses into one generic 500

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::http::params::ParamError;
use crate::upstream::UpstreamError;

/// Body sent for any upstream failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Service internal error";

/// Everything that can go wrong while serving `/random/mean`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method is not supported.")]
    MethodNotSupported,

    #[error(transparent)]
    Validation(#[from] ParamError),

    #[error("{0}")]
    Upstream(#[from] UpstreamError),

    #[error("json encoding error")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotSupported | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) | ApiError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message callers see.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Upstream(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            ApiError::Serialization(_) => "json encoding error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.public_message(),
        )
            .into_response()
    }
}
