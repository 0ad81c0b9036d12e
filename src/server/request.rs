//! Wire types for `POST /generate` and the validation that turns them into work.

use super::error::GenerationError;
use crate::prompt::{build_prompt, resolve_sections, DEFAULT_AUDIENCE, DEFAULT_TONE};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default)]
pub struct GenerateRequest {
    #[serde(default)]
    pub idea: Option<String>,
    #[serde(default)]
    pub options: Option<GenerateOptions>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct GenerateOptions {
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub sections: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PitchResponse {
    pub pitch: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

/// A request that passed validation. Only this type can produce a prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub idea: String,
    pub tone: String,
    pub audience: String,
    pub sections: Vec<String>,
}

impl GenerateRequest {
    pub fn validate(self) -> Result<ValidatedRequest, GenerationError> {
        let idea = self
            .idea
            .filter(|idea| !idea.trim().is_empty())
            .ok_or(GenerationError::EmptyIdea)?;

        let options = self.options.unwrap_or_default();
        let sections = options.sections.unwrap_or_default();
        if resolve_sections(&sections).is_empty() {
            return Err(GenerationError::NoSectionsSelected);
        }

        Ok(ValidatedRequest {
            idea,
            tone: or_default(options.tone, DEFAULT_TONE),
            audience: or_default(options.audience, DEFAULT_AUDIENCE),
            sections,
        })
    }
}

impl ValidatedRequest {
    pub fn prompt(&self) -> String {
        build_prompt(&self.idea, &self.tone, &self.audience, &self.sections)
    }
}

// Blank counts as absent; anything else is embedded as sent.
fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
