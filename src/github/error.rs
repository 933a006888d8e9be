//! GitHub API error types

use thiserror::Error;

/// Error types for GitHub App API operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Octocrab library error
    #[error("Octocrab error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    /// No installation of the App matches the requested account
    #[error("No installation found for {owner}")]
    InstallationNotFound { owner: String },

    /// The spawned API task went away before producing a result
    #[error("Task channel error: {0}")]
    TaskChannel(#[from] tokio::sync::oneshot::error::RecvError),
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;

impl GitHubError {
    /// Create an installation not found error.
    pub fn installation_not_found(owner: impl Into<String>) -> Self {
        Self::InstallationNotFound {
            owner: owner.into(),
        }
    }
}
