//! Installation token permission sets.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Access level granted for a single permission scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Read,
    Write,
    Admin,
}

impl AccessLevel {
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sparse mapping from GitHub permission scope (`contents`, `pull_requests`,
/// `organization_secrets`, ...) to access level.
///
/// Scopes that are not set are absent from the map and from the serialized
/// request body; nothing is defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permissions(BTreeMap<String, AccessLevel>);

impl Permissions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a single scope.
    #[must_use]
    pub fn with(mut self, scope: impl Into<String>, level: AccessLevel) -> Self {
        self.0.insert(scope.into(), level);
        self
    }

    #[must_use]
    pub fn get(&self, scope: &str) -> Option<AccessLevel> {
        self.0.get(scope).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, AccessLevel)> {
        self.0.iter().map(|(scope, level)| (scope.as_str(), *level))
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (scope, level) in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{scope}:{level}")?;
            first = false;
        }
        Ok(())
    }
}
