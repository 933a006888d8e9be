//! Apps API methods

use super::GitHubClient;
use crate::github::create_installation_token::{
    CreateInstallationTokenRequest, InstallationAccessToken,
};
use crate::github::error::GitHubError;
use crate::github::list_installations::AppInstallation;

impl GitHubClient {
    /// List installations of the App (first page only)
    #[must_use]
    pub fn list_installations(
        &self,
    ) -> crate::runtime::AsyncTask<Result<Vec<AppInstallation>, GitHubError>> {
        crate::github::list_installations::list_installations(self.inner.clone())
    }

    /// Create an installation access token
    #[must_use]
    pub fn create_installation_token(
        &self,
        installation_id: u64,
        request: CreateInstallationTokenRequest,
    ) -> crate::runtime::AsyncTask<Result<InstallationAccessToken, GitHubError>> {
        crate::github::create_installation_token::create_installation_token(
            self.inner.clone(),
            installation_id,
            request,
        )
    }
}
