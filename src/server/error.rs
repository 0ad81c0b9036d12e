//! Endpoint error taxonomy and its HTTP mapping.

use super::request::ErrorResponse;
use crate::llm::LLMError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Malformed request body: {reason}")]
    InvalidRequest { reason: String },

    #[error("Idea is missing or blank")]
    EmptyIdea,

    #[error("No valid sections selected")]
    NoSectionsSelected,

    #[error("Text generation service is not configured")]
    ServiceUnavailable,

    #[error("Provider call failed: {source}")]
    GenerationFailed { source: LLMError },

    #[error("Provider did not respond within {timeout:?}")]
    ProviderTimeout { timeout: Duration },
}

impl GenerationError {
    /// Provider timeouts keep their own kind; everything else the provider raises is a
    /// generation failure.
    pub fn from_provider(error: LLMError, timeout: Duration) -> Self {
        match error {
            LLMError::Timeout => GenerationError::ProviderTimeout { timeout },
            source => GenerationError::GenerationFailed { source },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            GenerationError::InvalidRequest { .. }
            | GenerationError::EmptyIdea
            | GenerationError::NoSectionsSelected => StatusCode::BAD_REQUEST,
            GenerationError::ServiceUnavailable
            | GenerationError::GenerationFailed { .. }
            | GenerationError::ProviderTimeout { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }

    /// Stable text shown to callers. Provider detail stays in the server log.
    pub fn public_message(&self) -> &'static str {
        match self {
            GenerationError::InvalidRequest { .. } => {
                "Request body must be a JSON object with an 'idea' field."
            }
            GenerationError::EmptyIdea => "Startup idea cannot be empty.",
            GenerationError::NoSectionsSelected => "Select at least one section to generate.",
            GenerationError::ServiceUnavailable => {
                "The generative model is not configured correctly."
            }
            GenerationError::GenerationFailed { .. } => {
                "An error occurred while generating content. Please try again."
            }
            GenerationError::ProviderTimeout { .. } => {
                "The generative model took too long to respond. Please try again."
            }
        }
    }
}

impl IntoResponse for GenerationError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
