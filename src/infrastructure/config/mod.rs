mod secrets;

pub use secrets::SpeechSecrets;

use crate::domain::tts::{GapPolicy, Pricing, DEFAULT_MAX_CHUNK_CHARS};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The secrets file was not found at {path}. Please ensure it is in the correct location.")]
    NotFound { path: PathBuf },
    #[error("The secrets file does not have the correct keys. Missing field: {field}")]
    MissingField { field: String },
    #[error("The secrets file could not be parsed: {0}")]
    Malformed(String),
    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    pub secrets_path: PathBuf,
    pub output_dir: PathBuf,
    pub max_chunk_chars: usize,
    pub pricing: Pricing,
    pub gap_policy: GapPolicy,
    /// Overrides `https://{region}.tts.speech.microsoft.com`
    pub speech_endpoint: Option<String>,
    pub preview_cache_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let max_chunk_chars: usize = parse_var("MAX_CHUNK_CHARS", DEFAULT_MAX_CHUNK_CHARS)?;
        if max_chunk_chars == 0 {
            return Err(ConfigError::Invalid {
                name: "MAX_CHUNK_CHARS",
                reason: "must be greater than zero".to_string(),
            });
        }

        let defaults = Pricing::default();
        let pricing = Pricing {
            neural_per_million: parse_var("NEURAL_RATE_PER_MILLION", defaults.neural_per_million)?,
            standard_per_million: parse_var(
                "STANDARD_RATE_PER_MILLION",
                defaults.standard_per_million,
            )?,
        };
        if pricing.neural_per_million < Decimal::ZERO || pricing.standard_per_million < Decimal::ZERO
        {
            return Err(ConfigError::Invalid {
                name: "RATE_PER_MILLION",
                reason: "rates cannot be negative".to_string(),
            });
        }

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 8080)?,
            log_format: match env::var("LOG_FORMAT").unwrap_or_default().as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            secrets_path: env::var("SPEECH_SECRETS_PATH")
                .unwrap_or_else(|_| "secrets.toml".to_string())
                .into(),
            output_dir: env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "output".to_string())
                .into(),
            max_chunk_chars,
            pricing,
            gap_policy: env::var("ON_CANCELLATION")
                .unwrap_or_else(|_| "skip".to_string())
                .parse()
                .map_err(|reason| ConfigError::Invalid {
                    name: "ON_CANCELLATION",
                    reason,
                })?,
            speech_endpoint: env::var("SPEECH_ENDPOINT").ok().filter(|s| !s.is_empty()),
            preview_cache_enabled: env::var("PREVIEW_CACHE_ENABLED")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
        };

        Ok(config)
    }
}

fn parse_var<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
