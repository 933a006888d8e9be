//! `ghrawel_tokenprovider` - GitHub App installation tokens via Octocrab
//!
//! This library validates scoped token requests coming through an API Gateway
//! token endpoint, resolves the GitHub App installation for the requested
//! owner and mints a permission- and repository-scoped installation access
//! token. The binary wires it into the AWS Lambda runtime.

// Module declarations
pub mod config;
pub mod error;
pub mod github;
pub mod installation;
pub mod logging;
pub mod model;
pub mod permissions;
pub mod policy;
pub mod provider;
pub mod response;
pub mod runtime;
pub mod secrets;
pub mod token;
pub mod validation;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export GitHub client types
pub use github::{
    AppInstallation, CreateInstallationTokenRequest, GitHubApps, GitHubClient,
    GitHubClientBuilder, GitHubConnector, InstallationAccessToken, InstallationAccount,
    OctocrabConnector,
};

// Re-export error types
pub use error::{InputError, TokenProviderError};
pub use github::{GitHubError, GitHubResult};

// Re-export pipeline types
pub use config::{ConfigError, ProviderConfig};
pub use installation::{InstallationCache, InstallationResolver};
pub use logging::Invocation;
pub use model::{App, Endpoint, TargetRule, TokenContext, TokenProviderInput, TokenRequest};
pub use permissions::{AccessLevel, Permissions};
pub use policy::{EndpointType, PolicyError, RepositorySelectionMode};
pub use provider::TokenProvider;
pub use response::{ErrorResponse, TokenResponse};
pub use secrets::{AwsSecretStore, PrivateKey, SecretError, SecretStore, SecretsStorage};
pub use validation::{NormalizedSelection, ValidationError, validate};
