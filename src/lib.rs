//! Pitch generation service: a short startup idea in, a structured pitch out.

pub mod config;
pub mod llm;
pub mod prompt;
pub mod server;
pub mod telemetry;

use crate::config::Config;
use crate::llm::{GeminiClient, TextGenerator};
use crate::server::AppState;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Build the provider handle once. `None` leaves the endpoint in `ServiceUnavailable` mode
/// instead of stopping the process.
pub fn build_generator(config: &Config) -> Option<Arc<dyn TextGenerator>> {
    if !config.has_credential() {
        warn!(
            "{} is not set; generation requests will be answered with an error",
            config::ENV_API_KEY
        );
        return None;
    }

    match GeminiClient::from_config(config) {
        Ok(client) => {
            info!(model = %config.model, endpoint = client.endpoint(), "Provider client ready");
            let generator: Arc<dyn TextGenerator> = Arc::new(client);
            Some(generator)
        }
        Err(e) => {
            error!(error = %e, "Failed to configure the provider client");
            None
        }
    }
}

/// Serve until Ctrl-C.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let state = AppState::new(build_generator(&config), config.request_timeout);
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
