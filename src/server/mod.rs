//! HTTP surface of the service.
//!
//! ```text
//! GET  /          static page
//! GET  /sections  section catalog
//! POST /generate  idea + options → { pitch } | { error }
//! ```
//!
//! Handlers share one [`AppState`]: the provider handle built at startup (or nothing, when
//! no credential was configured) and the per-call timeout. Neither changes after startup.

pub mod error;
pub mod handlers;
pub mod request;

pub use error::GenerationError;
pub use request::{ErrorResponse, GenerateOptions, GenerateRequest, PitchResponse};

use crate::llm::TextGenerator;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

#[derive(Clone)]
pub struct AppState {
    generator: Option<Arc<dyn TextGenerator>>,
    request_timeout: Duration,
}

impl AppState {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, request_timeout: Duration) -> Self {
        Self {
            generator,
            request_timeout,
        }
    }

    pub fn generator(&self) -> Option<&Arc<dyn TextGenerator>> {
        self.generator.as_ref()
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/sections", get(handlers::list_sections))
        .route("/generate", post(handlers::generate_pitch))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
}
