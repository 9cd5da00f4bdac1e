//! Runtime configuration read from the environment.
//!
//! The binary loads a `.env` file first (via `dotenv`); this module only reads
//! `std::env`. Static reference data (catalogs, pools) is compiled in and is
//! not configurable.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use validator::Validate;

use crate::error::AppError;

pub const ENV_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_MODEL: &str = "MIND_COMPANION_MODEL";
pub const ENV_API_BASE: &str = "MIND_COMPANION_API_BASE";
pub const ENV_TEMPERATURE: &str = "MIND_COMPANION_TEMPERATURE";
pub const ENV_MAX_OUTPUT_TOKENS: &str = "MIND_COMPANION_MAX_OUTPUT_TOKENS";
pub const ENV_TIMEOUT_SECS: &str = "MIND_COMPANION_TIMEOUT_SECS";
pub const ENV_HISTORY_WINDOW: &str = "MIND_COMPANION_HISTORY_WINDOW";
pub const ENV_LOG_FORMAT: &str = "MIND_COMPANION_LOG_FORMAT";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 800;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_HISTORY_WINDOW: usize = 10;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'text' or 'json', got '{}'",
                ENV_LOG_FORMAT, other
            ))),
        }
    }
}

/// Settings for the generation backend. Only exists when a credential is set.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerationConfig {
    #[serde(skip_serializing)]
    #[validate(length(min = 1))]
    pub api_key: String,
    #[validate(length(min = 1))]
    pub model: String,
    #[validate(length(min = 1))]
    pub api_base: String,
    /// Sampling temperature, between 0.0 and 2.0.
    #[validate(range(min = 0.0, max = 2.0))]
    pub temperature: f32,
    #[validate(range(min = 1))]
    pub max_output_tokens: u32,
    /// Upper bound on a single generation call, in seconds.
    #[validate(range(min = 1))]
    pub timeout_secs: u64,
}

impl GenerationConfig {
    /// Defaults for everything except the credential.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// `None` when no credential is configured; generation then always falls
    /// back to canned replies.
    pub generation: Option<GenerationConfig>,
    /// Maximum number of prior turns forwarded to the backend.
    pub history_window: usize,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generation: None,
            history_window: DEFAULT_HISTORY_WINDOW,
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Build the configuration from environment variables.
    ///
    /// A missing or blank credential is not an error. Any other variable that
    /// is set but cannot be parsed, or is out of range, is an
    /// [`AppError::Config`].
    pub fn from_env() -> Result<Self, AppError> {
        let generation = match non_blank(ENV_API_KEY) {
            Some(api_key) => {
                let mut config = GenerationConfig::with_api_key(api_key);
                if let Some(model) = non_blank(ENV_MODEL) {
                    config.model = model;
                }
                if let Some(api_base) = non_blank(ENV_API_BASE) {
                    config.api_base = api_base.trim_end_matches('/').to_string();
                }
                config.temperature = parse_var(ENV_TEMPERATURE, config.temperature)?;
                config.max_output_tokens =
                    parse_var(ENV_MAX_OUTPUT_TOKENS, config.max_output_tokens)?;
                config.timeout_secs = parse_var(ENV_TIMEOUT_SECS, config.timeout_secs)?;
                config
                    .validate()
                    .map_err(|e| AppError::Config(format!("Invalid generation settings: {}", e)))?;
                Some(config)
            }
            None => None,
        };

        let history_window = parse_var(ENV_HISTORY_WINDOW, DEFAULT_HISTORY_WINDOW)?;
        let log_format = match non_blank(ENV_LOG_FORMAT) {
            Some(value) => value.parse()?,
            None => LogFormat::Text,
        };

        Ok(Self {
            generation,
            history_window,
            log_format,
        })
    }
}

fn non_blank(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match non_blank(key) {
        Some(raw) => raw
            .parse()
            .map_err(|e| AppError::Config(format!("{} has invalid value '{}': {}", key, raw, e))),
        None => Ok(default),
    }
}
