use super::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Credentials for the speech provider, read from the `[speech_service]`
/// table of a local TOML file.
#[derive(Clone, PartialEq)]
pub struct SpeechSecrets {
    pub api_key: String,
    pub region: String,
}

impl fmt::Debug for SpeechSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechSecrets")
            .field("api_key", &"<redacted>")
            .field("region", &self.region)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct SecretsFile {
    speech_service: Option<toml::Table>,
}

impl SpeechSecrets {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let file: SecretsFile =
            toml::from_str(contents).map_err(|e| ConfigError::Malformed(e.message().to_string()))?;

        let table = file.speech_service.ok_or_else(|| ConfigError::MissingField {
            field: "speech_service".to_string(),
        })?;

        Ok(Self {
            api_key: required_string(&table, "api_key")?,
            region: required_string(&table, "region")?,
        })
    }
}

fn required_string(table: &toml::Table, key: &str) -> Result<String, ConfigError> {
    table
        .get(key)
        .and_then(|value| value.as_str())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ConfigError::MissingField {
            field: format!("speech_service.{}", key),
        })
}
