//! GitHub App API client wrapper
//!
//! Provides a clean API for the App endpoints the token provider calls,
//! without exposing Octocrab.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ghrawel_tokenprovider::GitHubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pem = std::fs::read_to_string("app.pem")?;
//!     let gh = GitHubClient::builder().app(1234, pem).build()?;
//!
//!     let installations = gh.list_installations().await??;
//!     println!("{} installations", installations.len());
//!
//!     Ok(())
//! }
//! ```

use crate::github::error::{GitHubError, GitHubResult};
use jsonwebtoken::EncodingKey;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::{Octocrab, models::AppId};
use std::sync::Arc;

mod apps;

/// GitHub API client wrapper that encapsulates Octocrab.
///
/// Authenticates as the App itself (JWT signed with the App's private key).
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create an App-authenticated client against api.github.com
    pub fn with_app(app_id: u64, private_key: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().app(app_id, private_key).build()
    }
}

/// Builder for creating an App-authenticated `GitHubClient`
pub struct GitHubClientBuilder {
    app_auth: Option<(AppId, String)>,
    base_uri: Option<String>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            app_auth: None,
            base_uri: None,
        }
    }

    /// Set GitHub App authentication (app ID and PEM private key)
    pub fn app(mut self, app_id: u64, private_key: impl Into<String>) -> Self {
        self.app_auth = Some((AppId(app_id), private_key.into()));
        self
    }

    /// Set base URI (for GitHub Enterprise)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Build the `GitHubClient`
    ///
    /// Octocrab's retry middleware is switched off: failures surface to the
    /// caller on the first attempt.
    pub fn build(self) -> GitHubResult<GitHubClient> {
        let (app_id, private_key) = self
            .app_auth
            .ok_or_else(|| GitHubError::ClientSetup("GitHub App credentials not set".to_string()))?;

        let key = EncodingKey::from_rsa_pem(private_key.as_bytes())
            .map_err(|e| GitHubError::ClientSetup(format!("Invalid RSA key: {e}")))?;

        let mut builder = Octocrab::builder()
            .add_retry_config(RetryConfig::None)
            .app(app_id, key);

        // Set base URI if provided
        if let Some(uri) = self.base_uri {
            builder = builder
                .base_uri(&uri)
                .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;
        }

        // Build Octocrab instance
        let octocrab = builder
            .build()
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;

        Ok(GitHubClient {
            inner: Arc::new(octocrab),
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
