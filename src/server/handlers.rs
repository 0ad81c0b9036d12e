use super::error::GenerationError;
use super::request::{GenerateRequest, PitchResponse};
use super::AppState;
use crate::prompt::{Section, SECTIONS};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Html,
    Json,
};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

const INDEX_HTML: &str = include_str!("static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn list_sections() -> Json<&'static [Section]> {
    Json(&SECTIONS[..])
}

/// `POST /generate`: validate, build the prompt, call the provider once.
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn generate_pitch(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<PitchResponse>, GenerationError> {
    let result = run_generation(&state, payload).await;

    match &result {
        Ok(Json(response)) => info!(pitch_len = response.pitch.len(), "Pitch generated"),
        Err(e) if e.is_client_error() => warn!(error = %e, "Rejected generation request"),
        Err(e) => error!(error = %e, "Generation request failed"),
    }

    result
}

async fn run_generation(
    state: &AppState,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<PitchResponse>, GenerationError> {
    let generator = state
        .generator()
        .ok_or(GenerationError::ServiceUnavailable)?;

    let Json(request) = payload.map_err(|e| GenerationError::InvalidRequest {
        reason: e.body_text(),
    })?;

    let request = request.validate()?;
    let prompt = request.prompt();

    info!(
        provider = generator.name(),
        prompt_len = prompt.len(),
        sections = request.sections.len(),
        "Calling provider"
    );

    let timeout = state.request_timeout();
    let pitch = match tokio::time::timeout(timeout, generator.generate(&prompt)).await {
        Ok(Ok(pitch)) => pitch,
        Ok(Err(e)) => return Err(GenerationError::from_provider(e, timeout)),
        Err(_) => return Err(GenerationError::ProviderTimeout { timeout }),
    };

    Ok(Json(PitchResponse { pitch }))
}
