//! Installation lookup with a process-lifetime cache.
//!
//! The cache maps App id, then owner login, to installation id. Entries are
//! added after a successful lookup and never refreshed or evicted.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use tokio::sync::RwLock;

use crate::github::{GitHubApps, GitHubError, GitHubResult};

/// Known installations keyed by App id, then owner.
#[derive(Debug, Default)]
pub struct InstallationCache {
    entries: RwLock<HashMap<u64, HashMap<String, u64>>>,
}

impl InstallationCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, app_id: u64, owner: &str) -> Option<u64> {
        let entries = self.entries.read().await;
        entries.get(&app_id).and_then(|owners| owners.get(owner)).copied()
    }

    pub async fn insert(&self, app_id: u64, owner: impl Into<String>, installation_id: u64) {
        let mut entries = self.entries.write().await;
        entries
            .entry(app_id)
            .or_default()
            .insert(owner.into(), installation_id);
    }

    /// Number of cached (app, owner) pairs.
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.values().map(HashMap::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Resolves the installation of an App for an account owner.
#[derive(Debug, Clone, Default)]
pub struct InstallationResolver {
    cache: Arc<InstallationCache>,
}

impl InstallationResolver {
    #[must_use]
    pub fn new(cache: Arc<InstallationCache>) -> Self {
        Self { cache }
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<InstallationCache> {
        &self.cache
    }

    /// Find the installation id for `owner`.
    ///
    /// Served from the cache when possible. Otherwise lists the App's
    /// installations once and takes the first whose account login equals
    /// `owner` exactly (case-sensitive). Misses are not cached.
    pub async fn resolve(
        &self,
        client: &dyn GitHubApps,
        app_id: u64,
        owner: &str,
    ) -> GitHubResult<u64> {
        if let Some(installation_id) = self.cache.get(app_id, owner).await {
            debug!("Installation {installation_id} for {owner} served from cache");
            return Ok(installation_id);
        }

        let installations = client.list_installations().await?;

        let installation_id = installations
            .iter()
            .find(|installation| installation.account.login == owner)
            .map(|installation| installation.id)
            .ok_or_else(|| GitHubError::installation_not_found(owner))?;

        self.cache.insert(app_id, owner, installation_id).await;
        debug!("Installation {installation_id} for {owner} cached for app {app_id}");

        Ok(installation_id)
    }
}
