//! Token provider error taxonomy.
//!
//! Every pipeline failure ends up as one of these variants. Only
//! [`TokenProviderError::Input`] carries a message the caller may see; all
//! other variants are logged in full and answered with an opaque 500.

use thiserror::Error;

use crate::config::ConfigError;
use crate::github::GitHubError;
use crate::policy::PolicyError;
use crate::secrets::SecretError;
use crate::validation::ValidationError;

/// Generic message returned for every 500-class failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Error";
pub const INVALID_OWNER_MESSAGE: &str = "Value of provided owner is invalid";
pub const INVALID_REPOSITORY_SELECTION_MESSAGE: &str = "Invalid repository selection.";

/// Caller-correctable input problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Value of provided owner ({0:?}) is invalid")]
    Owner(String),

    #[error("invalid repository selection: {0}")]
    Repositories(String),
}

impl InputError {
    /// Message safe to return to the caller.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Owner(_) => INVALID_OWNER_MESSAGE,
            Self::Repositories(_) => INVALID_REPOSITORY_SELECTION_MESSAGE,
        }
    }
}

/// Failure of a token provider invocation.
#[derive(Debug, Error)]
pub enum TokenProviderError {
    #[error("ConfigurationError - {0}")]
    Configuration(String),

    #[error("InputError - {0}")]
    Input(#[from] InputError),

    #[error("PrivateKeyError - {0}")]
    Secret(#[from] SecretError),

    #[error("GitHubClientError - {0}")]
    ClientConstruction(#[source] GitHubError),

    #[error("InstallationNotFound - Could not find installation for {owner}: {source}")]
    InstallationNotFound {
        owner: String,
        #[source]
        source: GitHubError,
    },

    #[error("TokenError - {0}")]
    Token(#[source] GitHubError),

    #[error("DeadlineExceeded - invocation deadline reached before a token was issued")]
    DeadlineExceeded,
}

impl TokenProviderError {
    /// Status the caller's routing layer selects through `CK_ERR_<status>`.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Input(_) => 400,
            _ => 500,
        }
    }

    /// Message returned to the caller. Internal detail never leaks here.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Input(input) => input.user_message(),
            _ => GENERIC_ERROR_MESSAGE,
        }
    }

    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}

impl From<ConfigError> for TokenProviderError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<PolicyError> for TokenProviderError {
    fn from(err: PolicyError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<ValidationError> for TokenProviderError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Policy(policy) => policy.into(),
            ValidationError::InvalidOwner(owner) => InputError::Owner(owner).into(),
            other => InputError::Repositories(other.to_string()).into(),
        }
    }
}
