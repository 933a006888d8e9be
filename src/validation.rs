//! Token request validation.
//!
//! Turns the raw `(endpoint type, selection mode, owner, repo)` quadruple into
//! a [`NormalizedSelection`]. Nothing downstream runs before this succeeds.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use thiserror::Error;

use crate::policy::{EndpointType, PolicyError, RepositorySelectionMode};

lazy_static! {
    static ref OWNER_REGEX: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z0-9-]+$").unwrap();
    static ref REPO_REGEX: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z0-9_.-]+$").unwrap();
}

/// Why a token request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Endpoint type or selection mode outside the known set.
    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("invalid owner {0:?}")]
    InvalidOwner(String),

    #[error("at least one repository has to be specified")]
    NoRepository,

    #[error("exactly one repository must be specified, got {0}")]
    TooManyRepositories(usize),

    #[error("one or more repositories specified with an invalid name: {0:?}")]
    InvalidRepositoryNames(Vec<String>),
}

impl ValidationError {
    /// Caller input errors, as opposed to deployment misconfiguration.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Policy(_))
    }
}

/// Validated owner and repository scoping for a token request.
///
/// `repositories` is `None` when the token should cover every repository of
/// the owner's installation; otherwise it lists the requested names in input
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSelection {
    owner: String,
    repositories: Option<Vec<String>>,
}

impl NormalizedSelection {
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repositories(&self) -> Option<&[String]> {
        self.repositories.as_deref()
    }

    #[must_use]
    pub fn into_parts(self) -> (String, Option<Vec<String>>) {
        (self.owner, self.repositories)
    }
}

/// Check an owner (organization or user login).
#[must_use]
pub fn is_valid_owner(owner: &str) -> bool {
    OWNER_REGEX.is_match(owner)
}

/// Check a single repository name.
#[must_use]
pub fn is_valid_repository_name(name: &str) -> bool {
    REPO_REGEX.is_match(name)
}

/// Validate a token request against endpoint policy.
///
/// Checks run in order: endpoint type, selection mode, owner, repositories.
/// The first failing check decides the error.
pub fn validate(
    endpoint_type: &str,
    selection_mode: &str,
    owner: &str,
    repo: Option<&str>,
) -> Result<NormalizedSelection, ValidationError> {
    let endpoint_type: EndpointType = endpoint_type.parse()?;
    let selection_mode: RepositorySelectionMode = selection_mode.parse()?;

    if !is_valid_owner(owner) {
        return Err(ValidationError::InvalidOwner(owner.to_string()));
    }

    let repositories = read_repositories(endpoint_type, selection_mode, repo)?;

    Ok(NormalizedSelection {
        owner: owner.to_string(),
        repositories,
    })
}

/// Split and check the comma-joined repository list.
///
/// An absent `repo` is an empty list. A present but empty string is one
/// empty name, which fails the name check.
pub fn read_repositories(
    endpoint_type: EndpointType,
    selection_mode: RepositorySelectionMode,
    repo: Option<&str>,
) -> Result<Option<Vec<String>>, ValidationError> {
    let repositories: Vec<String> = match repo {
        Some(raw) => raw.split(',').map(str::to_string).collect(),
        None => Vec::new(),
    };

    match selection_mode {
        RepositorySelectionMode::AtLeastOne => match repositories.len() {
            0 => return Err(ValidationError::NoRepository),
            1 => {}
            n => return Err(ValidationError::TooManyRepositories(n)),
        },
        RepositorySelectionMode::AllowOwner => {
            if endpoint_type.is_owner_endpoint() && repositories.is_empty() {
                return Ok(None);
            }
        }
    }

    let invalid: Vec<String> = repositories
        .iter()
        .filter(|name| !is_valid_repository_name(name))
        .cloned()
        .collect();

    if !invalid.is_empty() {
        for name in &invalid {
            debug!("Invalid name ({name:?}) provided for repository");
        }
        return Err(ValidationError::InvalidRepositoryNames(invalid));
    }

    Ok(Some(repositories))
}
