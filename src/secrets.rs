//! GitHub App private key storage.
//!
//! Keys live in AWS Systems Manager Parameter Store or AWS Secrets Manager,
//! addressed as `{prefix}/{app name}`. Both SDK clients are built once at
//! startup and reused for every invocation.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::retry::RetryConfig;
use thiserror::Error;

/// Recognized secrets backends (`SECRETS_STORAGE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretsStorage {
    ParameterStore,
    SecretsManager,
}

impl SecretsStorage {
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ParameterStore => "PARAMETER_STORE",
            Self::SecretsManager => "SECRETS_MANAGER",
        }
    }
}

impl FromStr for SecretsStorage {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PARAMETER_STORE" => Ok(Self::ParameterStore),
            "SECRETS_MANAGER" => Ok(Self::SecretsManager),
            other => Err(format!("Unknown SECRETS_STORAGE {other:?}")),
        }
    }
}

impl fmt::Display for SecretsStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// PEM-encoded GitHub App private key.
///
/// `Debug` never prints the key material. Use `.expose()` to access it.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(String);

impl PrivateKey {
    pub fn new(pem: impl Into<String>) -> Self {
        Self(pem.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// Failure reading a private key. The pipeline does not distinguish
/// not-found, permission and transport failures.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("failed to read {path} from {storage}: {message}")]
    Read {
        storage: SecretsStorage,
        path: String,
        message: String,
    },

    #[error("{path} in {storage} has no value")]
    Empty {
        storage: SecretsStorage,
        path: String,
    },
}

/// Location of an App's private key under a prefix.
#[must_use]
pub fn secret_path(prefix: &str, app_name: &str) -> String {
    format!("{prefix}/{app_name}")
}

/// Read contract for private key storage.
#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn private_key(
        &self,
        storage: SecretsStorage,
        prefix: &str,
        app_name: &str,
    ) -> Result<PrivateKey, SecretError>;
}

/// Parameter Store and Secrets Manager backed [`SecretStore`].
#[derive(Debug, Clone)]
pub struct AwsSecretStore {
    ssm: aws_sdk_ssm::Client,
    secrets_manager: aws_sdk_secretsmanager::Client,
}

impl AwsSecretStore {
    #[must_use]
    pub fn new(ssm: aws_sdk_ssm::Client, secrets_manager: aws_sdk_secretsmanager::Client) -> Self {
        Self {
            ssm,
            secrets_manager,
        }
    }

    /// Build both clients from the default AWS configuration chain.
    ///
    /// SDK retries are limited to a single attempt.
    pub async fn from_env() -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(RetryConfig::standard().with_max_attempts(1))
            .load()
            .await;

        Self::new(
            aws_sdk_ssm::Client::new(&config),
            aws_sdk_secretsmanager::Client::new(&config),
        )
    }

    async fn read_parameter(&self, path: String) -> Result<PrivateKey, SecretError> {
        let storage = SecretsStorage::ParameterStore;
        let output = self
            .ssm
            .get_parameter()
            .name(&path)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| SecretError::Read {
                storage,
                path: path.clone(),
                message: aws_sdk_ssm::error::DisplayErrorContext(&e).to_string(),
            })?;

        output
            .parameter()
            .and_then(|p| p.value())
            .map(PrivateKey::new)
            .ok_or(SecretError::Empty { storage, path })
    }

    async fn read_secret(&self, path: String) -> Result<PrivateKey, SecretError> {
        let storage = SecretsStorage::SecretsManager;
        let output = self
            .secrets_manager
            .get_secret_value()
            .secret_id(&path)
            .send()
            .await
            .map_err(|e| SecretError::Read {
                storage,
                path: path.clone(),
                message: aws_sdk_secretsmanager::error::DisplayErrorContext(&e).to_string(),
            })?;

        output
            .secret_string()
            .map(PrivateKey::new)
            .ok_or(SecretError::Empty { storage, path })
    }
}

#[async_trait]
impl SecretStore for AwsSecretStore {
    async fn private_key(
        &self,
        storage: SecretsStorage,
        prefix: &str,
        app_name: &str,
    ) -> Result<PrivateKey, SecretError> {
        let path = secret_path(prefix, app_name);
        match storage {
            SecretsStorage::ParameterStore => self.read_parameter(path).await,
            SecretsStorage::SecretsManager => self.read_secret(path).await,
        }
    }
}
