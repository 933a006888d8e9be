//! GitHub App API operations module
//!
//! Provides the App endpoints used for token issuance, on top of octocrab.

pub mod client;
pub mod connector;
pub mod error;
pub mod util;

// Re-export client types
pub use client::{GitHubClient, GitHubClientBuilder};
pub use connector::{GitHubApps, GitHubConnector, OctocrabConnector};

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use util::spawn_task;

// Re-export request/response types
pub use create_installation_token::{CreateInstallationTokenRequest, InstallationAccessToken};
pub use list_installations::{AppInstallation, InstallationAccount};

// GitHub API operations - Apps (internal)
pub(crate) mod create_installation_token;
pub(crate) mod list_installations;
