//! Gemini `generateContent` REST client.

use super::{LLMError, Result, TextGenerator};
use crate::config::{Config, GenerationConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationParams>,
}

#[derive(Serialize, Debug)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize, Debug)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Holds one `reqwest::Client` for the process lifetime. Nothing on it is mutated after
/// construction, so it is shared across requests behind an `Arc`.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    generation: GenerationConfig,
}

impl GeminiClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or(LLMError::MissingCredential)?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| LLMError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: endpoint_url(config.api_url.as_str(), &config.model),
            api_key,
            model: config.model.clone(),
            generation: config.generation.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body<'a>(&self, prompt: &'a str) -> GenerateContentRequest<'a> {
        let generation_config = (!self.generation.is_empty()).then(|| GenerationParams {
            temperature: self.generation.temperature,
            max_output_tokens: self.generation.max_output_tokens,
        });

        GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &str {
        &self.model
    }

    #[instrument(skip_all, fields(model = %self.model, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(match status.as_u16() {
                401 | 403 => LLMError::Authentication {
                    status: status.as_u16(),
                },
                429 => LLMError::RateLimited,
                code => LLMError::Http {
                    status: code,
                    body: error_text,
                },
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = extract_text(body)?;

        debug!(response_len = text.len(), "Provider returned content");
        Ok(text)
    }
}

fn endpoint_url(api_url: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        api_url.trim_end_matches('/'),
        model
    )
}

fn extract_text(response: GenerateContentResponse) -> Result<String> {
    let candidate = match response.candidates.into_iter().next() {
        Some(candidate) => candidate,
        None => {
            let reason = response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .map(|r| format!("prompt blocked: {}", r))
                .unwrap_or_else(|| "no candidates".to_string());
            return Err(LLMError::EmptyResponse { reason });
        }
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        let reason = candidate
            .finish_reason
            .map(|r| format!("finish reason: {}", r))
            .unwrap_or_else(|| "blank text".to_string());
        return Err(LLMError::EmptyResponse { reason });
    }

    Ok(text)
}

#[cfg(test)]
mod tests;
