//! Process configuration, read once at startup.
//!
//! Every value comes from the environment (after `.env` has been loaded by the binary).
//! The provider credential is the only value allowed to be missing: without it the
//! service still starts and answers every generation request with `ServiceUnavailable`.

use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "GEMINI_MODEL";
pub const ENV_API_URL: &str = "GEMINI_API_URL";
pub const ENV_BIND_ADDR: &str = "PITCHDECK_BIND_ADDR";
pub const ENV_REQUEST_TIMEOUT: &str = "PITCHDECK_REQUEST_TIMEOUT_SECS";
pub const ENV_TEMPERATURE: &str = "PITCHDECK_TEMPERATURE";
pub const ENV_MAX_OUTPUT_TOKENS: &str = "PITCHDECK_MAX_OUTPUT_TOKENS";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddress { var: &'static str, value: String },

    #[error("{var} is not a valid absolute URL: {value}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("{var} must be a number, got: {value}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be greater than zero")]
    ZeroTimeout { var: &'static str },
}

/// Optional sampling knobs forwarded to the provider untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationConfig {
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.max_output_tokens.is_none()
    }
}

#[derive(Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: Url,
    pub bind_addr: SocketAddr,
    pub request_timeout: Duration,
    pub generation: GenerationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            generation: GenerationConfig::default(),
        }
    }
}

// Never print the credential.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_url", &self.api_url.as_str())
            .field("bind_addr", &self.bind_addr)
            .field("request_timeout", &self.request_timeout)
            .field("generation", &self.generation)
            .finish()
    }
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Config::default();

        config.api_key = get(ENV_API_KEY);

        if let Some(model) = get(ENV_MODEL) {
            config.model = model;
        }

        if let Some(raw) = get(ENV_API_URL) {
            config.api_url = Url::parse(&raw)
                .ok()
                .filter(|u| !u.cannot_be_a_base())
                .ok_or(ConfigError::InvalidUrl {
                    var: ENV_API_URL,
                    value: raw,
                })?;
        }

        if let Some(raw) = get(ENV_BIND_ADDR) {
            config.bind_addr = raw
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidAddress {
                    var: ENV_BIND_ADDR,
                    value: raw.clone(),
                })?;
        }

        if let Some(secs) = parse_number::<u64>(get(ENV_REQUEST_TIMEOUT), ENV_REQUEST_TIMEOUT)? {
            if secs == 0 {
                return Err(ConfigError::ZeroTimeout {
                    var: ENV_REQUEST_TIMEOUT,
                });
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        config.generation = GenerationConfig {
            temperature: parse_number(get(ENV_TEMPERATURE), ENV_TEMPERATURE)?,
            max_output_tokens: parse_number(get(ENV_MAX_OUTPUT_TOKENS), ENV_MAX_OUTPUT_TOKENS)?,
        };

        Ok(config)
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

fn parse_number<T: std::str::FromStr>(
    raw: Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    raw.map(|value| {
        value
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { var, value })
    })
    .transpose()
}
