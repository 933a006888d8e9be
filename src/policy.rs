//! Token provider policy enumerations.
//!
//! Endpoint type and repository selection mode arrive as strings in the token
//! context. They are parsed once, at the edge of the pipeline; everything past
//! that point works with the closed enums below.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A policy value that is not one of the recognized variants.
///
/// This is a deployment misconfiguration, not caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("invalid endpoint type {0:?}")]
    EndpointType(String),

    #[error("invalid repository selection mode {0:?}")]
    RepositorySelectionMode(String),
}

/// Kind of endpoint the token request came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointType {
    /// No owner constraint
    Default,
    /// Owner fixed by the endpoint definition
    StaticOwner,
    /// Owner supplied by the caller
    DynamicOwner,
}

impl EndpointType {
    /// Returns the wire representation of this endpoint type.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::StaticOwner => "STATIC_OWNER",
            Self::DynamicOwner => "DYNAMIC_OWNER",
        }
    }

    /// Whether this is one of the owner endpoints (static or dynamic).
    #[inline]
    #[must_use]
    pub const fn is_owner_endpoint(&self) -> bool {
        matches!(self, Self::StaticOwner | Self::DynamicOwner)
    }
}

impl FromStr for EndpointType {
    type Err = PolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "DEFAULT" => Ok(Self::Default),
            "STATIC_OWNER" => Ok(Self::StaticOwner),
            "DYNAMIC_OWNER" => Ok(Self::DynamicOwner),
            other => Err(PolicyError::EndpointType(other.to_string())),
        }
    }
}

impl fmt::Display for EndpointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many repositories a token request may or must name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositorySelectionMode {
    /// Exactly one repository must be named
    AtLeastOne,
    /// Owner endpoints may omit repositories for an owner-wide token
    AllowOwner,
}

impl RepositorySelectionMode {
    /// Returns the wire representation of this selection mode.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AtLeastOne => "AT_LEAST_ONE",
            Self::AllowOwner => "ALLOW_OWNER",
        }
    }
}

impl FromStr for RepositorySelectionMode {
    type Err = PolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "AT_LEAST_ONE" => Ok(Self::AtLeastOne),
            "ALLOW_OWNER" => Ok(Self::AllowOwner),
            other => Err(PolicyError::RepositorySelectionMode(other.to_string())),
        }
    }
}

impl fmt::Display for RepositorySelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
