//! Seams between the token pipeline and the GitHub App API.
//!
//! The pipeline only ever talks to [`GitHubApps`], and obtains one per
//! invocation through a [`GitHubConnector`]. Production code uses
//! [`OctocrabConnector`]; tests substitute in-memory fakes.

use async_trait::async_trait;
use std::sync::Arc;

use crate::github::client::GitHubClient;
use crate::github::create_installation_token::{
    CreateInstallationTokenRequest, InstallationAccessToken,
};
use crate::github::error::GitHubResult;
use crate::github::list_installations::AppInstallation;
use crate::secrets::PrivateKey;

/// App-authenticated operations the token pipeline needs.
#[async_trait]
pub trait GitHubApps: Send + Sync {
    /// List the App's installations (single, unpaginated call).
    async fn list_installations(&self) -> GitHubResult<Vec<AppInstallation>>;

    /// Mint an installation access token.
    async fn create_installation_token(
        &self,
        installation_id: u64,
        request: CreateInstallationTokenRequest,
    ) -> GitHubResult<InstallationAccessToken>;
}

/// Builds an App-authenticated client from the App id and its private key.
pub trait GitHubConnector: Send + Sync {
    fn connect(&self, app_id: u64, private_key: &PrivateKey) -> GitHubResult<Arc<dyn GitHubApps>>;
}

#[async_trait]
impl GitHubApps for GitHubClient {
    async fn list_installations(&self) -> GitHubResult<Vec<AppInstallation>> {
        GitHubClient::list_installations(self).await?
    }

    async fn create_installation_token(
        &self,
        installation_id: u64,
        request: CreateInstallationTokenRequest,
    ) -> GitHubResult<InstallationAccessToken> {
        GitHubClient::create_installation_token(self, installation_id, request).await?
    }
}

/// Connector producing Octocrab-backed [`GitHubClient`]s.
#[derive(Debug, Clone, Default)]
pub struct OctocrabConnector {
    base_uri: Option<String>,
}

impl OctocrabConnector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Target a GitHub Enterprise (or test) API instead of api.github.com.
    #[must_use]
    pub fn with_base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }
}

impl GitHubConnector for OctocrabConnector {
    fn connect(&self, app_id: u64, private_key: &PrivateKey) -> GitHubResult<Arc<dyn GitHubApps>> {
        let mut builder = GitHubClient::builder().app(app_id, private_key.expose());
        if let Some(uri) = &self.base_uri {
            builder = builder.base_uri(uri.clone());
        }
        Ok(Arc::new(builder.build()?))
    }
}
