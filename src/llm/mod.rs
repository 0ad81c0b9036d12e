//! # Provider layer
//!
//! The endpoint only ever sees the [`TextGenerator`] trait. The concrete provider is the
//! Gemini REST API ([`gemini::GeminiClient`]); tests plug in their own implementations.
//!
//! ```text
//! prompt → TextGenerator::generate → generated text | LLMError
//! ```

pub mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("Request timeout - the API took too long to respond")]
    Timeout,
    #[error("Connection error - unable to reach the API: {reason}")]
    Connection { reason: String },
    #[error("Network error: {reason}")]
    Network { reason: String },
    #[error("Authentication failed ({status}) - check your API key")]
    Authentication { status: u16 },
    #[error("Rate limit exceeded - too many requests")]
    RateLimited,
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Failed to parse API response: {reason}")]
    InvalidResponse { reason: String },
    #[error("API returned empty content: {reason}")]
    EmptyResponse { reason: String },
    #[error("No API credential configured")]
    MissingCredential,
    #[error("Failed to create HTTP client: {reason}")]
    ClientBuild { reason: String },
}

pub type Result<T> = std::result::Result<T, LLMError>;

/// A text-completion capability shared by every request for the process lifetime.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Send one prompt and return the generated text verbatim.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

impl From<reqwest::Error> for LLMError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LLMError::Timeout
        } else if e.is_connect() {
            LLMError::Connection {
                reason: e.to_string(),
            }
        } else if e.is_decode() {
            LLMError::InvalidResponse {
                reason: e.to_string(),
            }
        } else {
            LLMError::Network {
                reason: e.to_string(),
            }
        }
    }
}
