//! GitHub App installations listing operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Account (organization or user) an installation is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationAccount {
    pub login: String,
}

/// The parts of an App installation the token provider needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInstallation {
    pub id: u64,
    pub account: InstallationAccount,
}

/// List installations of the authenticated App.
///
/// Issues a single `GET /app/installations` without following pagination, so
/// only the first page of installations is visible.
pub(crate) fn list_installations(
    inner: Arc<Octocrab>,
) -> AsyncTask<Result<Vec<AppInstallation>, GitHubError>> {
    spawn_task(async move {
        let installations: Vec<AppInstallation> = inner
            .get("/app/installations", None::<&()>)
            .await
            .map_err(GitHubError::from)?;
        Ok(installations)
    })
}
