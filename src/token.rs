//! Installation access token minting.

use log::debug;

use crate::github::{
    CreateInstallationTokenRequest, GitHubApps, GitHubResult, InstallationAccessToken,
};
use crate::permissions::Permissions;

/// Build the access token request body.
///
/// `repositories: None` means no repository scoping: the token covers every
/// repository the installation can reach.
#[must_use]
pub fn token_request(
    permissions: &Permissions,
    repositories: Option<&[String]>,
) -> CreateInstallationTokenRequest {
    CreateInstallationTokenRequest {
        repositories: repositories.map(<[String]>::to_vec),
        permissions: permissions.clone(),
    }
}

/// Mint a scoped installation access token.
pub async fn mint(
    client: &dyn GitHubApps,
    installation_id: u64,
    permissions: &Permissions,
    repositories: Option<&[String]>,
) -> GitHubResult<InstallationAccessToken> {
    let request = token_request(permissions, repositories);
    let token = client
        .create_installation_token(installation_id, request)
        .await?;

    debug!(
        "Installation token for {installation_id} expires at {}",
        token
            .expires_at
            .map(|at| at.to_rfc3339())
            .unwrap_or_else(|| "unknown".to_string())
    );

    Ok(token)
}
