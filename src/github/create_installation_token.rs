//! GitHub installation access token creation operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::permissions::Permissions;
use crate::runtime::AsyncTask;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of `POST /app/installations/{id}/access_tokens`.
///
/// `repositories` is left out entirely when `None` (or empty); GitHub then
/// scopes the token to every repository the installation can access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateInstallationTokenRequest {
    #[serde(skip_serializing_if = "is_unscoped")]
    pub repositories: Option<Vec<String>>,
    pub permissions: Permissions,
}

fn is_unscoped(repositories: &Option<Vec<String>>) -> bool {
    repositories.as_ref().is_none_or(Vec::is_empty)
}

/// Installation access token returned by GitHub.
#[derive(Clone, Deserialize)]
pub struct InstallationAccessToken {
    pub token: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for InstallationAccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallationAccessToken")
            .field("token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Create an installation access token scoped by permissions and repositories.
pub(crate) fn create_installation_token(
    inner: Arc<Octocrab>,
    installation_id: u64,
    request: CreateInstallationTokenRequest,
) -> AsyncTask<Result<InstallationAccessToken, GitHubError>> {
    spawn_task(async move {
        let route = format!("/app/installations/{installation_id}/access_tokens");
        let token: InstallationAccessToken = inner
            .post(route, Some(&request))
            .await
            .map_err(GitHubError::from)?;
        Ok(token)
    })
}
