//! Process configuration read from the Lambda environment.

use std::env;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::secrets::SecretsStorage;

lazy_static! {
    // "/" or "/segment(/segment)*"; segments start and end with a letter.
    static ref PREFIX_REGEX: Regex =
        Regex::new(r"^/$|^(/[a-zA-Z]([a-zA-Z0-9-]*[a-zA-Z])?)+$").unwrap();
}

pub const SECRETS_STORAGE_VAR: &str = "SECRETS_STORAGE";
pub const SECRETS_PREFIX_VAR: &str = "SECRETS_PREFIX";
pub const GITHUB_API_URL_VAR: &str = "GITHUB_API_URL";
pub const DEBUG_LOGGING_VAR: &str = "DEBUG_LOGGING";

/// Invalid deployment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown SECRETS_STORAGE {0:?}")]
    UnknownSecretsStorage(String),

    #[error("Invalid SECRETS_PREFIX {0:?}")]
    InvalidSecretsPrefix(String),
}

/// Check a secrets path prefix.
#[must_use]
pub fn is_valid_prefix(prefix: &str) -> bool {
    PREFIX_REGEX.is_match(prefix)
}

/// Secrets backend selection and key prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    storage: SecretsStorage,
    prefix: String,
}

impl ProviderConfig {
    /// Validate raw configuration values. Missing values are treated as empty
    /// strings and rejected the same way as any other invalid value.
    pub fn parse(storage: Option<&str>, prefix: Option<&str>) -> Result<Self, ConfigError> {
        let storage_raw = storage.unwrap_or_default();
        let storage = storage_raw
            .parse::<SecretsStorage>()
            .map_err(|_| ConfigError::UnknownSecretsStorage(storage_raw.to_string()))?;

        let prefix = prefix.unwrap_or_default();
        if !is_valid_prefix(prefix) {
            return Err(ConfigError::InvalidSecretsPrefix(prefix.to_string()));
        }

        Ok(Self {
            storage,
            prefix: prefix.to_string(),
        })
    }

    /// Read `SECRETS_STORAGE` and `SECRETS_PREFIX`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage = env::var(SECRETS_STORAGE_VAR).ok();
        let prefix = env::var(SECRETS_PREFIX_VAR).ok();
        Self::parse(storage.as_deref(), prefix.as_deref())
    }

    #[must_use]
    pub fn storage(&self) -> SecretsStorage {
        self.storage
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

/// Optional GitHub Enterprise API base URL (`GITHUB_API_URL`).
#[must_use]
pub fn github_api_url_from_env() -> Option<String> {
    env::var(GITHUB_API_URL_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// `DEBUG_LOGGING=true` switches the default log level to debug.
#[must_use]
pub fn debug_logging_from_env() -> bool {
    env::var(DEBUG_LOGGING_VAR).is_ok_and(|value| value == "true")
}

